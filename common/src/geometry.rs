//! Face geometry derived from the measured view size.
//!
//! [`FaceGeometry::compute`] and [`eye_position`] are pure functions of
//! their inputs. [`SmileyLayout`] caches the result of the latest measure
//! pass so the paint routine can read it without recomputing.

use embedded_graphics::prelude::Point;

use crate::density::Density;
use crate::layout::{CENTER_OFFSET_DP, EYE_OFFSETS, MOUTH_RECTS, RectOffsets, TONGUE_RECT};
use crate::state::RatingState;

// =============================================================================
// Value Types
// =============================================================================

/// Axis-aligned rectangle in fractional pixels.
///
/// Unlike `embedded_graphics::primitives::Rectangle` this can hold
/// degenerate and inverted rectangles, which the layout tables produce for
/// the flat neutral mouth and for zero-sized views.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn width(&self) -> f32 { self.right - self.left }

    #[inline]
    pub fn height(&self) -> f32 { self.bottom - self.top }

    #[inline]
    pub fn center_x(&self) -> f32 { (self.left + self.right) / 2.0 }

    #[inline]
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) / 2.0 }
}

/// Round a fractional coordinate to the nearest pixel.
#[inline]
pub fn round_px(value: f32) -> i32 { micromath::F32(value).round().0 as i32 }

/// Eye centers in pixels. A fresh value per lookup.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct EyePosition {
    pub left_x: i32,
    pub right_x: i32,
    pub y: i32,
}

impl EyePosition {
    #[inline]
    pub const fn left(&self) -> Point { Point::new(self.left_x, self.y) }

    #[inline]
    pub const fn right(&self) -> Point { Point::new(self.right_x, self.y) }
}

/// Every rectangle the widget paints for one view size.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct FaceGeometry {
    pub background: RectF,
    pub sad: RectF,
    pub neutral: RectF,
    pub okay: RectF,
    pub happy: RectF,
    pub amazing: RectF,
    pub tongue: RectF,
}

// =============================================================================
// Computation
// =============================================================================

/// Horizontal center of a view, using integer division like the measure pass.
#[inline]
pub const fn width_center(width: i32) -> i32 { width / 2 }

fn offset_rect(
    offsets: RectOffsets,
    width_center: f32,
    height: f32,
    density: Density,
) -> RectF {
    RectF::new(
        width_center + density.dp(offsets.left),
        height + density.dp(offsets.top),
        width_center + density.dp(offsets.right),
        height + density.dp(offsets.bottom),
    )
}

impl FaceGeometry {
    /// Compute all rectangles for a `width`×`height` view.
    pub fn compute(
        width: i32,
        height: i32,
        density: Density,
    ) -> Self {
        let w = width_center(width) as f32;
        let h = height as f32;
        let center_offset = density.dp_px(CENTER_OFFSET_DP) as f32;
        let mouth = |state: RatingState| offset_rect(MOUTH_RECTS[state.index()], w, h, density);

        Self {
            background: RectF::new(-center_offset, -h, width as f32 + center_offset, h),
            sad: mouth(RatingState::Sad),
            neutral: mouth(RatingState::Neutral),
            okay: mouth(RatingState::Okay),
            happy: mouth(RatingState::Happy),
            amazing: mouth(RatingState::Amazing),
            tongue: offset_rect(TONGUE_RECT, w, h, density),
        }
    }

    /// Mouth rectangle for a state.
    pub const fn mouth(
        &self,
        state: RatingState,
    ) -> RectF {
        match state {
            RatingState::Sad => self.sad,
            RatingState::Neutral => self.neutral,
            RatingState::Okay => self.okay,
            RatingState::Happy => self.happy,
            RatingState::Amazing => self.amazing,
        }
    }
}

/// Eye centers for `state` in a view whose horizontal center is `width_center`.
pub fn eye_position(
    state: RatingState,
    width_center: i32,
    density: Density,
) -> EyePosition {
    let offsets = EYE_OFFSETS[state.index()];
    EyePosition {
        left_x: width_center + density.dp_px(offsets.left),
        right_x: width_center + density.dp_px(offsets.right),
        y: density.dp_px(offsets.y),
    }
}

// =============================================================================
// Layout Cache
// =============================================================================

/// Geometry of the latest measure pass.
#[derive(Clone, Copy, Debug)]
pub struct SmileyLayout {
    density: Density,
    width: i32,
    height: i32,
    geometry: FaceGeometry,
}

impl SmileyLayout {
    /// An unmeasured layout (0×0).
    pub fn new(density: Density) -> Self {
        Self {
            density,
            width: 0,
            height: 0,
            geometry: FaceGeometry::compute(0, 0, density),
        }
    }

    /// Recompute every rectangle for a new view size.
    pub fn measure(
        &mut self,
        width: i32,
        height: i32,
    ) {
        self.width = width;
        self.height = height;
        self.geometry = FaceGeometry::compute(width, height, self.density);
        log::debug!("smiley layout measured {width}x{height} at density {}", self.density.scale());
    }

    /// Eye centers for `state` at the current width.
    #[inline]
    pub fn eye_position_for(
        &self,
        state: RatingState,
    ) -> EyePosition {
        eye_position(state, self.width_center(), self.density)
    }

    #[inline]
    pub const fn geometry(&self) -> &FaceGeometry { &self.geometry }

    #[inline]
    pub const fn density(&self) -> Density { self.density }

    #[inline]
    pub const fn width_center(&self) -> i32 { width_center(self.width) }

    /// Measured `(width, height)`.
    #[inline]
    pub const fn size(&self) -> (i32, i32) { (self.width, self.height) }
}

// =============================================================================
// Unit Tests
// =============================================================================
