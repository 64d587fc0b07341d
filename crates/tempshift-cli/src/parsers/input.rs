//! Input path validation.

use std::path::PathBuf;

/// Validate the INPUT argument.
///
/// An empty path is rejected here so the user gets a usage error rather
/// than a decode failure.
pub fn parse_input_path(input: &str) -> Result<PathBuf, String> {
    if input.trim().is_empty() {
        return Err("input image path must not be empty".to_string());
    }
    Ok(PathBuf::from(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_path() {
        assert_eq!(parse_input_path("in.png").unwrap(), PathBuf::from("in.png"));
        assert_eq!(
            parse_input_path("photos/my image.jpg").unwrap(),
            PathBuf::from("photos/my image.jpg")
        );
    }

    #[test]
    fn test_parse_input_path_empty() {
        assert!(parse_input_path("").is_err());
        assert!(parse_input_path("   ").is_err());
    }
}
