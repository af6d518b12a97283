#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Welding gun not found: {0}")]
    GunNotFound(String),

    #[error("Welding gun already registered: {0}")]
    DuplicateGun(String),

    #[error("Record id already stored: {0}")]
    DuplicateId(String),
}
