//! Error types for Hearthshare

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HearthError>;

#[derive(Error, Debug)]
pub enum HearthError {
    #[error("Photo error: {0}")]
    Photo(#[from] PhotoError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl HearthError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HearthError::InvalidInput(_) => 3,
            HearthError::Photo(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Failed to read photo file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("File has no extension: {0}")]
    MissingExtension(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = HearthError::InvalidInput("Empty title".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_photo_error() {
        let photo_error = PhotoError::UnsupportedType("bmp".to_string());
        let error = HearthError::Photo(photo_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = HearthError::InvalidInput("Title cannot be empty".to_string());
        assert_eq!(format!("{}", error), "Invalid input: Title cannot be empty");
    }

    #[test]
    fn test_error_message_formatting_unsupported_type() {
        let error = HearthError::Photo(PhotoError::UnsupportedType("tiff".to_string()));
        assert_eq!(format!("{}", error), "Photo error: Unsupported image type: tiff");
    }

    #[test]
    fn test_error_conversion_from_photo_error() {
        let photo_error = PhotoError::MissingExtension("recipe".to_string());
        let hearth_error: HearthError = photo_error.into();

        match hearth_error {
            HearthError::Photo(_) => {}
            _ => panic!("Expected HearthError::Photo"),
        }
    }

    #[test]
    fn test_photo_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let photo_error = PhotoError::Read(io_error);
        let message = format!("{}", photo_error);
        assert!(message.contains("Failed to read photo file"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_err() -> Result<String> {
            Err(HearthError::InvalidInput("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
