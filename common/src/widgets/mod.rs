//! Rendering for the smiley rating widget.
//!
//! All functions are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod face;
mod primitives;

pub use face::{draw_eyes, draw_face, draw_mouth};
