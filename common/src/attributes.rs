//! Style attribute sources.
//!
//! The widget never talks to a concrete theme system. It reads five keys
//! through two small traits:
//!
//! - [`AttributeSource`]: hands out a handle for one resolution pass.
//! - [`StyledAttributes`]: typed accessors on that handle, plus `recycle`.
//!
//! Two sources ship with the crate: [`NoAttributes`] (everything defaults)
//! and [`ThemeSource`], which reads `key = value` lines from borrowed text:
//!
//! ```text
//! // warm theme
//! face_color = #FFCA28
//! tongue_color = #FF8A80
//! default_rating = 3
//! ```
//!
//! Values are parsed on access, so a malformed value surfaces as an
//! [`AttributeError`] from the accessor that reads it.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::colors::rgb888;

// =============================================================================
// Keys and Errors
// =============================================================================

/// Attributes the widget understands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AttributeKey {
    FaceColor,
    EyesColor,
    MouthColor,
    TongueColor,
    DefaultRating,
}

impl AttributeKey {
    /// Every key, in resolution order.
    pub const ALL: [Self; 5] = [
        Self::FaceColor,
        Self::EyesColor,
        Self::MouthColor,
        Self::TongueColor,
        Self::DefaultRating,
    ];

    /// Name used in theme text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FaceColor => "face_color",
            Self::EyesColor => "eyes_color",
            Self::MouthColor => "mouth_color",
            Self::TongueColor => "tongue_color",
            Self::DefaultRating => "default_rating",
        }
    }

    /// Look up a key by its theme name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|key| key.name() == name) }
}

impl fmt::Display for AttributeKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure while reading style attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum AttributeError {
    /// The source could not produce a handle at all.
    #[error("attribute source unavailable")]
    Unavailable,

    /// A line in theme text has no `=` separator or an empty key.
    #[error("malformed theme line {line}")]
    Malformed { line: usize },

    /// A color value is not `#RRGGBB` or `#AARRGGBB`.
    #[error("attribute `{key}` is not a color (expected #RRGGBB or #AARRGGBB)")]
    InvalidColor { key: AttributeKey },

    /// An integer value is not a decimal `i32`.
    #[error("attribute `{key}` is not an integer")]
    InvalidInteger { key: AttributeKey },
}

// =============================================================================
// Traits
// =============================================================================

/// Typed read access to resolved style attributes.
///
/// `Ok(None)` means "not specified"; the caller applies its default.
pub trait StyledAttributes {
    fn color(
        &self,
        key: AttributeKey,
    ) -> Result<Option<Rgb565>, AttributeError>;

    fn integer(
        &self,
        key: AttributeKey,
    ) -> Result<Option<i32>, AttributeError>;

    /// Release whatever backs this handle. Called exactly once by [`Recycled`].
    fn recycle(&mut self) {}
}

/// Something that can hand out attribute handles.
pub trait AttributeSource {
    type Handle: StyledAttributes;

    fn obtain(&self) -> Result<Self::Handle, AttributeError>;
}

/// Scope guard that recycles a handle when dropped.
///
/// Dropping happens on every exit path, including early `?` returns, so the
/// handle is released exactly once.
pub struct Recycled<H: StyledAttributes>(H);

impl<H: StyledAttributes> Recycled<H> {
    pub const fn new(handle: H) -> Self { Self(handle) }
}

impl<H: StyledAttributes> core::ops::Deref for Recycled<H> {
    type Target = H;

    fn deref(&self) -> &H { &self.0 }
}

impl<H: StyledAttributes> Drop for Recycled<H> {
    fn drop(&mut self) { self.0.recycle(); }
}

// =============================================================================
// Empty Source
// =============================================================================

/// A source that specifies nothing.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoAttributes;

impl StyledAttributes for NoAttributes {
    fn color(
        &self,
        _key: AttributeKey,
    ) -> Result<Option<Rgb565>, AttributeError> {
        Ok(None)
    }

    fn integer(
        &self,
        _key: AttributeKey,
    ) -> Result<Option<i32>, AttributeError> {
        Ok(None)
    }
}

impl AttributeSource for NoAttributes {
    type Handle = Self;

    fn obtain(&self) -> Result<Self, AttributeError> { Ok(Self) }
}

// =============================================================================
// Theme Text Source
// =============================================================================

/// Theme text waiting to be read.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSource<'t> {
    text: &'t str,
}

impl<'t> ThemeSource<'t> {
    pub const fn new(text: &'t str) -> Self { Self { text } }
}

impl<'t> AttributeSource for ThemeSource<'t> {
    type Handle = ThemeAttributes<'t>;

    fn obtain(&self) -> Result<ThemeAttributes<'t>, AttributeError> { ThemeAttributes::parse(self.text) }
}

/// Raw `key = value` pairs split out of theme text.
///
/// Only known keys are kept; a repeated key overrides the earlier value.
#[derive(Clone, Debug, Default)]
pub struct ThemeAttributes<'t> {
    entries: Vec<(AttributeKey, &'t str), 5>,
}

impl<'t> ThemeAttributes<'t> {
    /// Split theme text into entries.
    ///
    /// Blank lines and lines starting with `//` are skipped. Unknown keys are
    /// logged and ignored.
    pub fn parse(text: &'t str) -> Result<Self, AttributeError> {
        let mut attrs = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let line_no = idx + 1;
            let (name, value) = line.split_once('=').ok_or(AttributeError::Malformed { line: line_no })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(AttributeError::Malformed { line: line_no });
            }

            match AttributeKey::from_name(name) {
                Some(key) => attrs.insert(key, value.trim()),
                None => log::debug!("ignoring unknown theme attribute `{name}` on line {line_no}"),
            }
        }

        Ok(attrs)
    }

    fn insert(
        &mut self,
        key: AttributeKey,
        value: &'t str,
    ) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            // One slot per key, so this cannot overflow.
            self.entries.push((key, value)).ok();
        }
    }

    /// Raw value for a key, if specified.
    pub fn raw(
        &self,
        key: AttributeKey,
    ) -> Option<&'t str> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Number of recognised entries.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl StyledAttributes for ThemeAttributes<'_> {
    fn color(
        &self,
        key: AttributeKey,
    ) -> Result<Option<Rgb565>, AttributeError> {
        self.raw(key)
            .map(|value| parse_hex_color(value).ok_or(AttributeError::InvalidColor { key }))
            .transpose()
    }

    fn integer(
        &self,
        key: AttributeKey,
    ) -> Result<Option<i32>, AttributeError> {
        self.raw(key)
            .map(|value| value.parse::<i32>().map_err(|_| AttributeError::InvalidInteger { key }))
            .transpose()
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`. Alpha is accepted and discarded.
pub fn parse_hex_color(value: &str) -> Option<Rgb565> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = match hex.len() {
        6 => hex,
        8 => &hex[2..],
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&rgb[i..i + 2], 16).ok();
    Some(rgb888(channel(0)?, channel(2)?, channel(4)?))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in AttributeKey::ALL {
            assert_eq!(AttributeKey::from_name(key.name()), Some(key));
        }
        assert_eq!(AttributeKey::from_name("nose_color"), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some(rgb888(255, 255, 255)));
        assert_eq!(parse_hex_color("#ffd54f"), Some(rgb888(0xFF, 0xD5, 0x4F)));
        assert_eq!(parse_hex_color("#80E57373"), Some(rgb888(0xE5, 0x73, 0x73)));
    }

    #[test]
    fn test_parse_hex_color_rejects_bad_input() {
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#+F0000"), None);
        assert_eq!(parse_hex_color("#ÿÿÿ"), None);
    }

    #[test]
    fn test_theme_parse_known_keys() {
        let text = "// comment\n\nface_color = #FFCA28\n  default_rating=3  \nsparkle = yes\n";
        let attrs = ThemeAttributes::parse(text).unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.raw(AttributeKey::FaceColor), Some("#FFCA28"));
        assert_eq!(attrs.integer(AttributeKey::DefaultRating), Ok(Some(3)));
        assert_eq!(attrs.color(AttributeKey::EyesColor), Ok(None));
    }

    #[test]
    fn test_theme_later_value_wins() {
        let attrs = ThemeAttributes::parse("default_rating = 1\ndefault_rating = 4").unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.integer(AttributeKey::DefaultRating), Ok(Some(4)));
    }

    #[test]
    fn test_theme_malformed_line() {
        let err = ThemeAttributes::parse("face_color = #FFFFFF\nnot a pair").unwrap_err();
        assert_eq!(err, AttributeError::Malformed { line: 2 });

        let err = ThemeAttributes::parse(" = #FFFFFF").unwrap_err();
        assert_eq!(err, AttributeError::Malformed { line: 1 });
    }

    #[test]
    fn test_theme_bad_values_fail_on_read() {
        let attrs = ThemeAttributes::parse("mouth_color = brown\ndefault_rating = three").unwrap();
        assert_eq!(
            attrs.color(AttributeKey::MouthColor),
            Err(AttributeError::InvalidColor { key: AttributeKey::MouthColor })
        );
        assert_eq!(
            attrs.integer(AttributeKey::DefaultRating),
            Err(AttributeError::InvalidInteger { key: AttributeKey::DefaultRating })
        );
    }

    #[test]
    fn test_no_attributes_is_empty() {
        let handle = NoAttributes.obtain().unwrap();
        for key in AttributeKey::ALL {
            assert_eq!(handle.color(key), Ok(None));
            assert_eq!(handle.integer(key), Ok(None));
        }
    }
}
