/// Reason an uploaded archive filename was rejected.
#[derive(Debug)]
pub enum FilenameError {
    /// Filename is empty or whitespace-only.
    Empty,
    /// Filename contains path separators (`/` or `\`).
    ContainsPathSeparator,
    /// Filename contains path traversal patterns (`..`).
    PathTraversal,
    /// Filename contains null bytes.
    NullByte,
    /// Filename starts with a dot (hidden file).
    Hidden,
    /// Filename contains control characters (CR, LF, etc.).
    ControlCharacter,
}

impl FilenameError {
    /// Returns a human-readable error message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Filename cannot be empty",
            Self::ContainsPathSeparator => "Invalid filename: path separators are not allowed",
            Self::PathTraversal => "Invalid filename: '..' is not allowed",
            Self::NullByte => "Invalid filename: null bytes are not allowed",
            Self::Hidden => "Invalid filename: hidden files (starting with '.') are not allowed",
            Self::ControlCharacter => "Invalid filename: control characters are not allowed",
        }
    }
}

/// Validates a flat filename (no directory components allowed) for the
/// upload sink.
pub fn validate_flat_filename(filename: &str) -> Result<&str, FilenameError> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }

    if trimmed.contains('\0') {
        return Err(FilenameError::NullByte);
    }

    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(FilenameError::ControlCharacter);
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }

    if trimmed == ".." {
        return Err(FilenameError::PathTraversal);
    }

    if trimmed.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_archive_names() {
        assert_eq!(validate_flat_filename("solution.zip").unwrap(), "solution.zip");
        assert_eq!(validate_flat_filename("  padded.zip  ").unwrap(), "padded.zip");
    }

    #[test]
    fn rejects_path_components_and_traversal() {
        assert!(matches!(
            validate_flat_filename("a/b.zip"),
            Err(FilenameError::ContainsPathSeparator)
        ));
        assert!(matches!(
            validate_flat_filename("..\\evil.zip"),
            Err(FilenameError::ContainsPathSeparator)
        ));
        assert!(matches!(
            validate_flat_filename(".."),
            Err(FilenameError::PathTraversal)
        ));
    }

    #[test]
    fn rejects_empty_hidden_and_control_characters() {
        assert!(matches!(validate_flat_filename("   "), Err(FilenameError::Empty)));
        assert!(matches!(
            validate_flat_filename(".hidden"),
            Err(FilenameError::Hidden)
        ));
        assert!(matches!(
            validate_flat_filename("bad\nname.zip"),
            Err(FilenameError::ControlCharacter)
        ));
        assert!(matches!(
            validate_flat_filename("nul\0.zip"),
            Err(FilenameError::NullByte)
        ));
    }
}
