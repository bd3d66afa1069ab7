//! Utilidades de validación
//!
//! Validadores custom para usar con `#[validate(custom = "...")]`.

use validator::ValidationError;

/// Validar que un string no esté vacío ni sea solo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Lada").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn test_not_blank_error_code() {
        let error = validate_not_blank("").unwrap_err();
        assert_eq!(error.code, "not_blank");
    }
}
