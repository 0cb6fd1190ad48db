//! Smiley rating widget core.
//!
//! This crate contains the platform-agnostic part of the widget, shared
//! between the desktop simulator and any embedded host:
//!
//! - [`state`]: the five rating states
//! - [`attributes`]: attribute sources (theme text, empty) and their errors
//! - [`config`]: palette and default rating resolution with full fallback
//! - [`layout`]: dp constants and per-state offset tables
//! - [`density`]: dp to pixel conversion
//! - [`geometry`]: rectangles and eye positions for a measured view
//! - [`widgets`]: `embedded-graphics` rendering of face, mouth and eyes
//! - [`widget`]: the [`SmileyRating`] control tying it together
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Logging goes through the `log` facade; installing a logger is up to the host.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod attributes;
pub mod colors;
pub mod config;
pub mod density;
pub mod geometry;
pub mod layout;
pub mod state;
pub mod widget;
pub mod widgets;

// Re-export commonly used items
pub use attributes::{AttributeError, AttributeKey, AttributeSource, NoAttributes, StyledAttributes, ThemeSource};
pub use config::{Palette, SmileyConfig};
pub use density::Density;
pub use geometry::{EyePosition, FaceGeometry, RectF, SmileyLayout};
pub use state::RatingState;
pub use widget::SmileyRating;
