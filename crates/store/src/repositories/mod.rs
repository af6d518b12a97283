//! Repository layer.
//!
//! Each repository is a zero-sized struct providing methods that accept
//! `&RecordStore` (reads) or `&mut RecordStore` (appends) as the first
//! argument. There are no update or delete operations.

pub mod gun_repo;
pub mod maintenance_repo;
pub mod part_replacement_repo;
pub mod spot_count_repo;

pub use gun_repo::GunRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use part_replacement_repo::PartReplacementRepo;
pub use spot_count_repo::SpotCountRepo;
