use super::models::Config;
use crate::vfs::IgnoreRules;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No gallery roots configured (at least one is required)")]
    NoRootsConfigured,

    #[error("Two gallery roots share the base name '{name}' — rename one or drop it")]
    DuplicateRootName { name: String },

    #[error("max_inline_pixels must be positive")]
    InvalidMaxInlinePixels,

    #[error("Ignore pattern rejected: {0}")]
    BadIgnorePattern(#[from] crate::vfs::IgnoreError),

    #[error("Thumbnail size must be positive")]
    InvalidIconSize,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_roots(config)?;
    validate_gallery(config)?;
    validate_tools(config)?;
    Ok(())
}

/// At least one root, and no two configured roots may collide on base name.
/// Collisions would silently shadow one root behind another, so the process
/// refuses to start instead.
fn validate_roots(config: &Config) -> Result<(), ValidationError> {
    if config.gallery.roots.is_empty() {
        return Err(ValidationError::NoRootsConfigured);
    }

    let mut seen = std::collections::HashSet::new();
    for root in &config.gallery.roots {
        if let Some(name) = root.file_name().and_then(|n| n.to_str()) {
            if !seen.insert(name.to_string()) {
                return Err(ValidationError::DuplicateRootName {
                    name: name.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_gallery(config: &Config) -> Result<(), ValidationError> {
    if config.gallery.max_inline_pixels == 0 {
        return Err(ValidationError::InvalidMaxInlinePixels);
    }
    // Compiling here surfaces bad patterns at startup, not per request.
    IgnoreRules::compile(&config.gallery.ignores)?;
    Ok(())
}

fn validate_tools(config: &Config) -> Result<(), ValidationError> {
    if config.tools.icon_size == 0 {
        return Err(ValidationError::InvalidIconSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_roots(roots: &[&str]) -> Config {
        let mut config = Config::default();
        config.gallery.roots = roots.iter().map(PathBuf::from).collect();
        config
    }

    #[test]
    fn test_empty_roots_rejected() {
        let config = Config::default();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::NoRootsConfigured)
        ));
    }

    #[test]
    fn test_duplicate_base_names_rejected() {
        let config = config_with_roots(&["/a/media", "/b/media"]);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::DuplicateRootName { ref name }) if name == "media"
        ));
    }

    #[test]
    fn test_distinct_roots_accepted() {
        let config = config_with_roots(&["/a/media", "/b/books"]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_max_inline_pixels_rejected() {
        let mut config = config_with_roots(&["/a/media"]);
        config.gallery.max_inline_pixels = 0;
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidMaxInlinePixels)
        ));
    }

    #[test]
    fn test_zero_icon_size_rejected() {
        let mut config = config_with_roots(&["/a/media"]);
        config.tools.icon_size = 0;
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidIconSize)
        ));
    }
}
