//! Helpers for turning `validator` output into user-facing messages.

use validator::ValidationErrors;

/// Flatten field errors into `"field: message"` pairs joined by `"; "`,
/// ordered by field name so the output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1))]
        count: i64,
    }

    #[test]
    fn describe_orders_fields_and_falls_back_to_code() {
        let errors = Probe { name: String::new(), count: 0 }.validate().unwrap_err();
        assert_eq!(describe(&errors), "count: range; name: Name is required");
    }
}
