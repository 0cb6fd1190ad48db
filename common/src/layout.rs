//! Layout constants in density-independent units (dp).
//!
//! Every shape the widget draws is an additive offset from the horizontal
//! center of the view (`W`) or from the view height (`H`). The tables here
//! are indexed by [`RatingState::index`](crate::RatingState::index) so lookups
//! are a single array access instead of a branch per state.
//!
//! # Compile-Time Validation
//!
//! Orderings the renderer relies on (top above bottom, tongue inside the
//! amazing mouth) are checked with `const` assertions.

// =============================================================================
// Scalar Constants
// =============================================================================

/// Horizontal overhang of the face background past each view edge.
pub const CENTER_OFFSET_DP: i32 = 120;

/// Radius of each eye.
pub const EYE_RADIUS_DP: f32 = 10.0;

/// Stroke width for mouth outlines.
pub const STROKE_WIDTH_DP: f32 = 10.0;

/// Rating selected when the attribute source does not specify one (`Okay`).
pub const DEFAULT_RATING: i32 = 2;

/// Number of line segments approximating one half of an ellipse.
pub const ARC_SEGMENTS: usize = 24;

// =============================================================================
// Rectangle Offsets
// =============================================================================

/// Offsets of one rectangle relative to `(W, H)`.
///
/// `left`/`right` are added to the width center, `top`/`bottom` to the
/// view height.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RectOffsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectOffsets {
    const fn new(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Self {
        Self { left, top, right, bottom }
    }
}

/// Mouth bounding boxes, one per rating state (Sad, Neutral, Okay, Happy, Amazing).
///
/// Neutral has zero height: its mouth is a straight line.
pub const MOUTH_RECTS: [RectOffsets; 5] = [
    RectOffsets::new(-90.0, -180.0, 90.0, -20.0),
    RectOffsets::new(-120.0, -110.0, 120.0, -110.0),
    RectOffsets::new(-110.0, -250.0, 110.0, -70.0),
    RectOffsets::new(-130.0, -330.0, 130.0, -70.0),
    RectOffsets::new(-132.0, -330.0, 132.0, -50.0),
];

/// Tongue bounding box, drawn inside the amazing mouth.
pub const TONGUE_RECT: RectOffsets = RectOffsets::new(-70.0, -220.0, 70.0, -75.0);

// =============================================================================
// Eye Offsets
// =============================================================================

/// Eye centers for one rating state.
///
/// `left`/`right` are added to the width center; `y` is measured from the
/// top of the view and does not depend on its height.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EyeOffsets {
    pub left: i32,
    pub right: i32,
    pub y: i32,
}

impl EyeOffsets {
    const fn new(
        left: i32,
        right: i32,
        y: i32,
    ) -> Self {
        Self { left, right, y }
    }
}

/// Eye centers, one per rating state (Sad, Neutral, Okay, Happy, Amazing).
///
/// Neutral is deliberately kept asymmetric (-120/+100).
pub const EYE_OFFSETS: [EyeOffsets; 5] = [
    EyeOffsets::new(-90, 90, 80),
    EyeOffsets::new(-120, 100, 80),
    EyeOffsets::new(-20, 20, 300),
    EyeOffsets::new(-20, 20, 82),
    EyeOffsets::new(-120, 120, 72),
];

// =============================================================================
// Compile-Time Validation
// =============================================================================

const fn rect_is_ordered(r: RectOffsets) -> bool { r.left <= r.right && r.top <= r.bottom }

const _: () = assert!(rect_is_ordered(MOUTH_RECTS[0]));
const _: () = assert!(rect_is_ordered(MOUTH_RECTS[1]));
const _: () = assert!(rect_is_ordered(MOUTH_RECTS[2]));
const _: () = assert!(rect_is_ordered(MOUTH_RECTS[3]));
const _: () = assert!(rect_is_ordered(MOUTH_RECTS[4]));
const _: () = assert!(rect_is_ordered(TONGUE_RECT));

// Tongue must sit inside the amazing mouth.
const _: () = assert!(TONGUE_RECT.left >= MOUTH_RECTS[4].left && TONGUE_RECT.right <= MOUTH_RECTS[4].right);
const _: () = assert!(TONGUE_RECT.top >= MOUTH_RECTS[4].top && TONGUE_RECT.bottom <= MOUTH_RECTS[4].bottom);

const _: () = assert!(DEFAULT_RATING >= 0 && DEFAULT_RATING <= 4);
const _: () = assert!(ARC_SEGMENTS >= 2);
