//! Simulator settings taken from the command line and environment.
//!
//! - First argument: path to a theme file (`key = value` lines)
//! - `SMILEY_DENSITY`: pixels per dp (default 0.5)

use std::{env, fs};

use log::{info, warn};
use smiley_common::Density;

/// Density used when `SMILEY_DENSITY` is unset or invalid.
pub const DEFAULT_DENSITY: f32 = 0.5;

/// Environment variable holding the density scale.
pub const DENSITY_ENV: &str = "SMILEY_DENSITY";

/// Read the theme file named by the first CLI argument.
///
/// Returns an empty theme when no path is given or the file cannot be read,
/// so the widget falls back to its default palette.
pub fn load_theme() -> String {
    let Some(path) = env::args().nth(1) else {
        info!("No theme file given, using default palette");
        return String::new();
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            info!("Loaded theme from {path}");
            text
        }
        Err(e) => {
            log::error!("Failed to read theme {path}: {e}");
            String::new()
        }
    }
}

/// Density from `SMILEY_DENSITY`, or [`DEFAULT_DENSITY`].
pub fn density_from_env() -> Density {
    match env::var(DENSITY_ENV) {
        Ok(raw) => parse_density(&raw).unwrap_or_else(|| {
            warn!("Ignoring {DENSITY_ENV}={raw:?}, using {DEFAULT_DENSITY}");
            Density::new(DEFAULT_DENSITY)
        }),
        Err(_) => Density::new(DEFAULT_DENSITY),
    }
}

fn parse_density(raw: &str) -> Option<Density> {
    let scale: f32 = raw.trim().parse().ok()?;
    (scale.is_finite() && scale > 0.0).then(|| Density::new(scale))
}
