//! Widget configuration resolved from style attributes.
//!
//! Resolution is all-or-nothing: if obtaining the handle or reading any
//! attribute fails, the error is logged and the whole configuration falls
//! back to [`SmileyConfig::default`]. The attribute handle is recycled
//! exactly once either way.

use embedded_graphics::pixelcolor::Rgb565;

use crate::attributes::{AttributeError, AttributeKey, AttributeSource, Recycled, StyledAttributes};
use crate::colors::{DEFAULT_EYES, DEFAULT_FACE, DEFAULT_MOUTH, DEFAULT_TONGUE};
use crate::layout::DEFAULT_RATING;

/// The four colors the widget paints with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub face: Rgb565,
    pub eyes: Rgb565,
    pub mouth: Rgb565,
    pub tongue: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            face: DEFAULT_FACE,
            eyes: DEFAULT_EYES,
            mouth: DEFAULT_MOUTH,
            tongue: DEFAULT_TONGUE,
        }
    }
}

/// Resolved configuration: palette plus the initially selected rating.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SmileyConfig {
    pub palette: Palette,
    /// Raw rating as configured. Clamped when turned into a state.
    pub default_rating: i32,
}

impl Default for SmileyConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            default_rating: DEFAULT_RATING,
        }
    }
}

impl SmileyConfig {
    /// Resolve configuration from `source`, falling back to defaults on any error.
    pub fn resolve<S: AttributeSource>(source: &S) -> Self {
        match Self::try_resolve(source) {
            Ok(config) => config,
            Err(err) => {
                log::error!("smiley rating: {err}, using default configuration");
                Self::default()
            }
        }
    }

    /// Resolve configuration from `source`, reporting the first error.
    pub fn try_resolve<S: AttributeSource>(source: &S) -> Result<Self, AttributeError> {
        let attrs = Recycled::new(source.obtain()?);
        let defaults = Self::default();

        let color = |key: AttributeKey, fallback: Rgb565| -> Result<Rgb565, AttributeError> {
            Ok(attrs.color(key)?.unwrap_or(fallback))
        };

        let palette = Palette {
            face: color(AttributeKey::FaceColor, defaults.palette.face)?,
            eyes: color(AttributeKey::EyesColor, defaults.palette.eyes)?,
            mouth: color(AttributeKey::MouthColor, defaults.palette.mouth)?,
            tongue: color(AttributeKey::TongueColor, defaults.palette.tongue)?,
        };
        let default_rating = attrs
            .integer(AttributeKey::DefaultRating)?
            .unwrap_or(defaults.default_rating);

        Ok(Self { palette, default_rating })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
