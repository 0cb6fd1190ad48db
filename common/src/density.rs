//! Display density scaling.
//!
//! Every layout constant is expressed in density-independent units (dp).
//! A [`Density`] converts them to physical pixels for one display.

/// Pixels per dp for the target display.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Density(f32);

impl Density {
    /// One pixel per dp.
    pub const IDENTITY: Self = Self(1.0);

    /// Create a density from a scale factor.
    ///
    /// Non-finite or non-positive scales fall back to [`Density::IDENTITY`].
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            log::warn!("ignoring invalid density scale {scale}, using 1.0");
            Self::IDENTITY
        }
    }

    /// The raw scale factor.
    #[inline]
    pub const fn scale(self) -> f32 { self.0 }

    /// Convert a dp value to fractional pixels.
    #[inline]
    pub fn dp(
        self,
        value: f32,
    ) -> f32 {
        value * self.0
    }

    /// Convert a whole dp value to whole pixels, rounding to nearest.
    #[inline]
    pub fn dp_px(
        self,
        value: i32,
    ) -> i32 {
        micromath::F32(value as f32 * self.0).round().0 as i32
    }
}

impl Default for Density {
    fn default() -> Self { Self::IDENTITY }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_passthrough() {
        let d = Density::IDENTITY;
        assert_eq!(d.dp(90.0), 90.0);
        assert_eq!(d.dp_px(-120), -120);
    }

    #[test]
    fn test_scaled_values() {
        let d = Density::new(2.0);
        assert_eq!(d.dp(10.0), 20.0);
        assert_eq!(d.dp_px(120), 240);
    }

    #[test]
    fn test_dp_px_rounds_to_nearest() {
        let d = Density::new(0.8);
        // 82 * 0.8 = 65.6, 13 * 0.8 = 10.4
        assert_eq!(d.dp_px(82), 66);
        assert_eq!(d.dp_px(13), 10);
        assert_eq!(d.dp_px(90), 72);
        assert_eq!(d.dp_px(-82), -66);
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        assert_eq!(Density::new(0.0), Density::IDENTITY);
        assert_eq!(Density::new(-1.5), Density::IDENTITY);
        assert_eq!(Density::new(f32::NAN), Density::IDENTITY);
    }
}
