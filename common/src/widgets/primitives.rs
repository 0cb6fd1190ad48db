//! Low-level drawing primitives shared by the face widget.
//!
//! `embedded-graphics` only draws circular arcs, so elliptical mouths are
//! approximated with [`ARC_SEGMENTS`] straight segments. Filled halves are
//! drawn as a triangle fan around the ellipse center.
//!
//! Whole ellipses are filled row by row in `f32` and clipped to the target,
//! so their size is not bounded by the target or by integer area math.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Polyline, Rectangle, Triangle};
use heapless::Vec;

use crate::geometry::{RectF, round_px};
use crate::layout::ARC_SEGMENTS;

/// Points along one half of an ellipse, endpoints included.
type ArcPoints = Vec<Point, { ARC_SEGMENTS + 1 }>;

/// Which half of an ellipse to trace. Screen y grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HalfEllipse {
    /// Top half, traced left to right. A frown.
    Upper,
    /// Bottom half, traced right to left. A smile.
    Lower,
}

/// Sample the half of the ellipse inscribed in `rect`.
fn half_ellipse_points(
    rect: &RectF,
    half: HalfEllipse,
) -> ArcPoints {
    let cx = rect.center_x();
    let cy = rect.center_y();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let start = match half {
        HalfEllipse::Lower => 0.0,
        HalfEllipse::Upper => PI,
    };

    let mut points = ArcPoints::new();
    for i in 0..=ARC_SEGMENTS {
        let angle = start + PI * i as f32 / ARC_SEGMENTS as f32;
        let x = cx + rx * micromath::F32(angle).cos().0;
        let y = cy + ry * micromath::F32(angle).sin().0;
        // Capacity is ARC_SEGMENTS + 1, exactly the number of samples.
        points.push(Point::new(round_px(x), round_px(y))).ok();
    }
    points
}

/// Center of `rect` on the pixel grid.
#[inline]
fn rect_center(rect: &RectF) -> Point { Point::new(round_px(rect.center_x()), round_px(rect.center_y())) }

/// Fill the ellipse inscribed in `rect`, clipped to the target's bounds.
///
/// Only rows that intersect the target are visited. Each row is one
/// horizontal span sampled at the pixel center.
pub fn fill_ellipse<D>(
    display: &mut D,
    rect: &RectF,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return Ok(());
    }
    let area = display.bounding_box();
    let Some(bottom_right) = area.bottom_right() else {
        return Ok(());
    };
    let cx = rect.center_x();
    let cy = rect.center_y();

    let top = round_px(rect.top).max(area.top_left.y);
    let bottom = round_px(rect.bottom).min(bottom_right.y + 1);
    for y in top..bottom {
        let dy = (y as f32 + 0.5 - cy) / ry;
        let span = 1.0 - dy * dy;
        if span <= 0.0 {
            continue;
        }
        let dx = rx * micromath::F32(span).sqrt().0;
        let left = round_px(cx - dx).max(area.top_left.x);
        let right = round_px(cx + dx).min(bottom_right.x + 1);
        if right > left {
            let row = Rectangle::new(Point::new(left, y), Size::new((right - left) as u32, 1));
            display.fill_solid(&row, color)?;
        }
    }
    Ok(())
}

/// Stroke half an ellipse.
pub fn draw_half_ellipse<D>(
    display: &mut D,
    rect: &RectF,
    half: HalfEllipse,
    color: Rgb565,
    stroke_width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let points = half_ellipse_points(rect, half);
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
        .draw(display)
}

/// Fill half an ellipse, including the chord that closes it.
pub fn fill_half_ellipse<D>(
    display: &mut D,
    rect: &RectF,
    half: HalfEllipse,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = rect_center(rect);
    let style = PrimitiveStyle::with_fill(color);
    let points = half_ellipse_points(rect, half);

    for pair in points.windows(2) {
        Triangle::new(center, pair[0], pair[1])
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Stroke a horizontal line through the vertical center of `rect`.
pub fn draw_center_line<D>(
    display: &mut D,
    rect: &RectF,
    color: Rgb565,
    stroke_width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let y = round_px(rect.center_y());
    Line::new(Point::new(round_px(rect.left), y), Point::new(round_px(rect.right), y))
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
        .draw(display)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn close(
        a: Point,
        b: Point,
    ) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
    }

    #[test]
    fn test_lower_half_endpoints() {
        let rect = RectF::new(0.0, 0.0, 100.0, 50.0);
        let points = half_ellipse_points(&rect, HalfEllipse::Lower);
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert!(close(points[0], Point::new(100, 25)), "{:?}", points[0]);
        assert!(close(points[ARC_SEGMENTS / 2], Point::new(50, 50)), "{:?}", points[ARC_SEGMENTS / 2]);
        assert!(close(points[ARC_SEGMENTS], Point::new(0, 25)), "{:?}", points[ARC_SEGMENTS]);
    }

    #[test]
    fn test_upper_half_endpoints() {
        let rect = RectF::new(0.0, 0.0, 100.0, 50.0);
        let points = half_ellipse_points(&rect, HalfEllipse::Upper);
        assert!(close(points[0], Point::new(0, 25)));
        assert!(close(points[ARC_SEGMENTS / 2], Point::new(50, 0)));
        assert!(close(points[ARC_SEGMENTS], Point::new(100, 25)));
    }

    #[test]
    fn test_halves_stay_on_their_side() {
        let rect = RectF::new(10.0, 10.0, 90.0, 70.0);
        let cy = round_px(rect.center_y());
        assert!(half_ellipse_points(&rect, HalfEllipse::Lower).iter().all(|p| p.y >= cy - 1));
        assert!(half_ellipse_points(&rect, HalfEllipse::Upper).iter().all(|p| p.y <= cy + 1));
    }

    #[test]
    fn test_flat_rect_collapses_to_line() {
        let rect = RectF::new(0.0, 40.0, 100.0, 40.0);
        let points = half_ellipse_points(&rect, HalfEllipse::Lower);
        assert!(points.iter().all(|p| p.y == 40));
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(rect_center(&RectF::new(370.0, 1670.0, 630.0, 1930.0)), Point::new(500, 1800));
    }

    #[test]
    fn test_fill_ellipse_larger_than_target() {
        // 4000x8000 box centered on (32, 0): far beyond any u32 area product.
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let rect = RectF::new(-1968.0, -4000.0, 2032.0, 4000.0);
        fill_ellipse(&mut display, &rect, Rgb565::RED).unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(Rgb565::RED));
    }

    #[test]
    fn test_fill_ellipse_leaves_corners() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        fill_ellipse(&mut display, &RectF::new(0.0, 0.0, 64.0, 64.0), Rgb565::RED).unwrap();

        assert_eq!(display.get_pixel(Point::new(32, 32)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(32, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(63, 63)), None);
    }

    #[test]
    fn test_fill_ellipse_skips_empty_rect() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        fill_ellipse(&mut display, &RectF::new(10.0, 40.0, 50.0, 40.0), Rgb565::RED).unwrap();
        assert_eq!(display.affected_area(), Rectangle::zero());
    }
}
