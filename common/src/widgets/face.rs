//! Face, mouth and eye rendering.
//!
//! Paint order is face, mouth, eyes. Each function only reads geometry that
//! was computed by the last measure pass.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use super::primitives::{HalfEllipse, draw_center_line, draw_half_ellipse, fill_ellipse, fill_half_ellipse};
use crate::config::Palette;
use crate::geometry::{EyePosition, FaceGeometry, RectF};
use crate::state::RatingState;

/// Fill the face: the ellipse inscribed in the background rectangle.
///
/// The background overhangs the view on every side and is centered on the
/// top edge, so only the lower middle of the ellipse is visible. Rows
/// outside the target are skipped.
pub fn draw_face<D>(
    display: &mut D,
    background: &RectF,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_ellipse(display, background, color)
}

/// Draw the mouth for `state`.
pub fn draw_mouth<D>(
    display: &mut D,
    state: RatingState,
    geometry: &FaceGeometry,
    palette: &Palette,
    stroke_width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let rect = geometry.mouth(state);
    match state {
        RatingState::Sad => draw_half_ellipse(display, &rect, HalfEllipse::Upper, palette.mouth, stroke_width),
        RatingState::Neutral => draw_center_line(display, &rect, palette.mouth, stroke_width),
        RatingState::Okay => draw_half_ellipse(display, &rect, HalfEllipse::Lower, palette.mouth, stroke_width),
        RatingState::Happy => fill_half_ellipse(display, &rect, HalfEllipse::Lower, palette.mouth),
        RatingState::Amazing => {
            fill_half_ellipse(display, &rect, HalfEllipse::Lower, palette.mouth)?;
            fill_half_ellipse(display, &geometry.tongue, HalfEllipse::Lower, palette.tongue)
        }
    }
}

/// Draw both eyes as filled circles.
pub fn draw_eyes<D>(
    display: &mut D,
    eyes: EyePosition,
    diameter: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(color);
    Circle::with_center(eyes.left(), diameter)
        .into_styled(style)
        .draw(display)?;
    Circle::with_center(eyes.right(), diameter)
        .into_styled(style)
        .draw(display)
}
