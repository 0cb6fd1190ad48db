//! The smiley rating widget.
//!
//! Ties together resolved configuration, the cached layout and the selected
//! rating. Hosts drive it through two entry points:
//!
//! - [`SmileyRating::on_measure`] whenever the view size changes
//! - [`SmileyRating::draw`] whenever the view needs painting
//!
//! Rating selection ([`SmileyRating::set_rating`]) is left to the host; the
//! widget does not interpret input events.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::attributes::AttributeSource;
use crate::config::{Palette, SmileyConfig};
use crate::density::Density;
use crate::geometry::{EyePosition, FaceGeometry, SmileyLayout, round_px};
use crate::layout::{EYE_RADIUS_DP, STROKE_WIDTH_DP};
use crate::state::RatingState;
use crate::widgets::{draw_eyes, draw_face, draw_mouth};

/// A five-state smiley rating control.
#[derive(Clone, Copy, Debug)]
pub struct SmileyRating {
    config: SmileyConfig,
    layout: SmileyLayout,
    state: RatingState,
    eyes: EyePosition,
}

impl SmileyRating {
    /// Create an unmeasured widget showing `config.default_rating`.
    pub fn new(
        config: SmileyConfig,
        density: Density,
    ) -> Self {
        let layout = SmileyLayout::new(density);
        let state = RatingState::from_rating(config.default_rating);
        Self {
            config,
            layout,
            state,
            eyes: layout.eye_position_for(state),
        }
    }

    /// Resolve configuration from `source` and create the widget.
    pub fn from_source<S: AttributeSource>(
        source: &S,
        density: Density,
    ) -> Self {
        Self::new(SmileyConfig::resolve(source), density)
    }

    // =========================================================================
    // Host Callbacks
    // =========================================================================

    /// Recompute geometry for a new view size.
    pub fn on_measure(
        &mut self,
        width: i32,
        height: i32,
    ) {
        self.layout.measure(width, height);
        self.eyes = self.layout.eye_position_for(self.state);
    }

    /// Paint the face, mouth and eyes.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = self.palette();
        let geometry = self.geometry();

        draw_face(display, &geometry.background, palette.face)?;
        draw_mouth(display, self.state, geometry, palette, self.stroke_width_px())?;
        draw_eyes(display, self.eyes, self.eye_diameter_px(), palette.eyes)
    }

    // =========================================================================
    // Rating Selection
    // =========================================================================

    /// Select a state. Returns `true` if it changed.
    pub fn set_state(
        &mut self,
        state: RatingState,
    ) -> bool {
        if state == self.state {
            return false;
        }
        log::debug!("smiley rating {} -> {}", self.state.label(), state.label());
        self.state = state;
        self.eyes = self.layout.eye_position_for(state);
        true
    }

    /// Select an integer rating, clamped into `0..=4`. Returns `true` if it changed.
    #[inline]
    pub fn set_rating(
        &mut self,
        rating: i32,
    ) -> bool {
        self.set_state(RatingState::from_rating(rating))
    }

    #[inline]
    pub fn step_up(&mut self) -> bool { self.set_state(self.state.next()) }

    #[inline]
    pub fn step_down(&mut self) -> bool { self.set_state(self.state.previous()) }

    /// Return to the configured default rating.
    #[inline]
    pub fn reset(&mut self) -> bool { self.set_rating(self.config.default_rating) }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> RatingState { self.state }

    /// Selected rating as an integer in `0..=4`.
    #[inline]
    pub const fn rating(&self) -> i32 { self.state as i32 }

    #[inline]
    pub const fn default_rating(&self) -> i32 { self.config.default_rating }

    #[inline]
    pub const fn palette(&self) -> &Palette { &self.config.palette }

    #[inline]
    pub const fn geometry(&self) -> &FaceGeometry { self.layout.geometry() }

    /// Eye centers for the selected state at the current size.
    #[inline]
    pub const fn eye_position(&self) -> EyePosition { self.eyes }

    /// Eye radius in fractional pixels.
    #[inline]
    pub fn eye_radius(&self) -> f32 { self.layout.density().dp(EYE_RADIUS_DP) }

    /// Mouth stroke width in fractional pixels.
    #[inline]
    pub fn stroke_width(&self) -> f32 { self.layout.density().dp(STROKE_WIDTH_DP) }

    /// Eye diameter on the pixel grid (at least one pixel).
    pub fn eye_diameter_px(&self) -> u32 { round_px(self.eye_radius() * 2.0).max(1) as u32 }

    /// Stroke width on the pixel grid (at least one pixel).
    pub fn stroke_width_px(&self) -> u32 { round_px(self.stroke_width()).max(1) as u32 }
}

// =============================================================================
// Unit Tests
// =============================================================================
