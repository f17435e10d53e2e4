//! Result type alias for Mascara
//!
//! This module provides a convenient Result type alias that uses MascaraError
//! as the error type.

use super::errors::MascaraError;

/// Result type alias for Mascara operations
///
/// # Examples
///
/// ```
/// use mascara::domain::result::Result;
/// use mascara::domain::errors::MascaraError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MascaraError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MascaraError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{MascaraError, TableError};

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MascaraError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> std::result::Result<i32, TableError> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
