//! Visual generation types.

use std::fmt;

/// Requested image resolution.
///
/// Resolutions above the base `1K` are premium and tier-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageResolution {
    /// Base resolution, available on every tier.
    #[default]
    OneK,
    /// Premium resolution.
    TwoK,
    /// Premium resolution.
    FourK,
}

impl ImageResolution {
    /// Returns all resolution variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::OneK, Self::TwoK, Self::FourK]
    }

    /// Returns the resolution as the engine's size label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }

    /// Parses a resolution from a size label.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "1K" => Some(Self::OneK),
            "2K" => Some(Self::TwoK),
            "4K" => Some(Self::FourK),
            _ => None,
        }
    }

    /// Returns true if this resolution is above the base tier.
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        !matches!(self, Self::OneK)
    }
}

impl fmt::Display for ImageResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualArtifact {
    /// Decoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type reported by the engine.
    pub mime_type: String,
}

impl VisualArtifact {
    /// Creates a new artifact.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// A generated video, referenced by URI rather than carried inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    /// Download URI for the rendered video.
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_parse_roundtrip() {
        for res in ImageResolution::all() {
            assert_eq!(ImageResolution::parse(res.as_str()), Some(*res));
        }
        assert_eq!(ImageResolution::parse("4k"), Some(ImageResolution::FourK));
        assert_eq!(ImageResolution::parse("8K"), None);
    }

    #[test]
    fn test_only_base_resolution_is_unrestricted() {
        assert!(!ImageResolution::OneK.is_premium());
        assert!(ImageResolution::TwoK.is_premium());
        assert!(ImageResolution::FourK.is_premium());
    }
}
