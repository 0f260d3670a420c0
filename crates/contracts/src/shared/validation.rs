//! Structural checks applied to every payload decoded from the backend.
//!
//! Serde guarantees the shape; these checks guarantee the values are usable
//! in arithmetic and as list keys.

/// Validation of a decoded payload.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        for (index, item) in self.iter().enumerate() {
            item.validate()
                .map_err(|e| format!("item #{}: {}", index, e))?;
        }
        Ok(())
    }
}

/// Identifier must be present and non-blank.
pub fn require_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err("id is empty".into());
    }
    Ok(())
}

/// Optional amount must be a finite number when present.
pub fn finite(field: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() => Err(format!("{} is not a finite number", field)),
        _ => Ok(()),
    }
}

/// Optional amount must be finite and not negative when present.
pub fn non_negative(field: &str, value: Option<f64>) -> Result<(), String> {
    finite(field, value)?;
    match value {
        Some(v) if v < 0.0 => Err(format!("{} must not be negative", field)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Amount(Option<f64>);

    impl Validate for Amount {
        fn validate(&self) -> Result<(), String> {
            non_negative("amount", self.0)
        }
    }

    #[test]
    fn test_missing_amount_is_valid() {
        assert!(Amount(None).validate().is_ok());
    }

    #[test]
    fn test_nan_and_negative_are_rejected() {
        assert!(Amount(Some(f64::NAN)).validate().is_err());
        assert!(Amount(Some(-0.5)).validate().is_err());
        assert!(finite("x", Some(-0.5)).is_ok());
    }

    #[test]
    fn test_vec_reports_failing_index() {
        let items = vec![Amount(Some(1.0)), Amount(Some(-1.0))];
        let err = items.validate().unwrap_err();
        assert!(err.starts_with("item #1:"), "{}", err);
    }

    #[test]
    fn test_blank_id() {
        assert!(require_id("  ").is_err());
        assert!(require_id("job-1").is_ok());
    }
}
