//! Smiley rating simulator for Windows/Desktop.
//!
//! Hosts the widget from `smiley-common` in an SDL2 window via
//! `embedded-graphics-simulator`.
//!
//! # Usage
//!
//! ```text
//! SMILEY_DENSITY=0.5 simulator [theme-file]
//! ```
//!
//! # Key bindings
//!
//! | Key        | Action                      |
//! |------------|-----------------------------|
//! | 1–5        | Select Sad … Amazing        |
//! | Left/Right | Step rating down / up       |
//! | R          | Reset to the default rating |
//! | Q / Esc    | Quit                        |

// Crate-level lints
#![allow(clippy::cast_possible_wrap)]

mod settings;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text, TextStyle, TextStyleBuilder};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use profont::PROFONT_12_POINT;
use smiley_common::colors::BLACK;
use smiley_common::{RatingState, SmileyRating, ThemeSource};

use crate::settings::{density_from_env, load_theme};
use crate::timing::FRAME_TIME;

/// Display width in pixels.
const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
const SCREEN_HEIGHT: u32 = 320;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Baseline of the state caption, centered horizontally.
const CAPTION_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 14);

const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// What a key press asks the widget to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Command {
    Select(RatingState),
    StepUp,
    StepDown,
    Reset,
    Quit,
}

fn keycode_to_command(keycode: Keycode) -> Option<Command> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(Command::Select(RatingState::Sad)),
        Keycode::Num2 | Keycode::Kp2 => Some(Command::Select(RatingState::Neutral)),
        Keycode::Num3 | Keycode::Kp3 => Some(Command::Select(RatingState::Okay)),
        Keycode::Num4 | Keycode::Kp4 => Some(Command::Select(RatingState::Happy)),
        Keycode::Num5 | Keycode::Kp5 => Some(Command::Select(RatingState::Amazing)),
        Keycode::Right | Keycode::Up => Some(Command::StepUp),
        Keycode::Left | Keycode::Down => Some(Command::StepDown),
        Keycode::R => Some(Command::Reset),
        Keycode::Q | Keycode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Clear, paint the widget and its caption.
fn render(
    display: &mut SimulatorDisplay<Rgb565>,
    widget: &SmileyRating,
) {
    display.clear(BLACK).ok();
    if let Err(e) = widget.draw(display) {
        log::error!("Draw error: {e:?}");
    }

    let caption_style = MonoTextStyle::new(&PROFONT_12_POINT, widget.palette().mouth);
    Text::with_text_style(widget.state().label(), CAPTION_POS, caption_style, CENTERED)
        .draw(display)
        .ok();
}

fn main() {
    env_logger::init();

    let theme = load_theme();
    let density = density_from_env();
    info!("Display: {SCREEN_WIDTH}×{SCREEN_HEIGHT} (scale {WINDOW_SCALE}×, density {})", density.scale());
    info!("Keys: 1-5=Select  Left/Right=Step  R=Reset  Q=Quit");

    let mut widget = SmileyRating::from_source(&ThemeSource::new(&theme), density);
    widget.on_measure(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
    info!("Starting at {} (default rating {})", widget.state().label(), widget.default_rating());

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Smiley Rating", &output_settings);

    // The SDL window is created on the first update(); events() panics before that.
    render(&mut display, &widget);
    window.update(&display);
    let mut dirty = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let changed = match keycode_to_command(keycode) {
                        Some(Command::Quit) => break 'running,
                        Some(Command::Select(state)) => widget.set_state(state),
                        Some(Command::StepUp) => widget.step_up(),
                        Some(Command::StepDown) => widget.step_down(),
                        Some(Command::Reset) => widget.reset(),
                        None => false,
                    };
                    if changed {
                        info!("Rating: {} ({})", widget.state().label(), widget.rating());
                        dirty = true;
                    }
                }
                _ => {}
            }
        }

        if dirty {
            render(&mut display, &widget);
            dirty = false;
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    info!("Simulator closed");
}

#[cfg(test)]
mod tests {
    use smiley_common::Density;

    use super::*;
    use crate::settings::DEFAULT_DENSITY;

    #[test]
    fn test_number_keys_select_states() {
        assert_eq!(keycode_to_command(Keycode::Num1), Some(Command::Select(RatingState::Sad)));
        assert_eq!(keycode_to_command(Keycode::Kp5), Some(Command::Select(RatingState::Amazing)));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(keycode_to_command(Keycode::Right), Some(Command::StepUp));
        assert_eq!(keycode_to_command(Keycode::Left), Some(Command::StepDown));
        assert_eq!(keycode_to_command(Keycode::R), Some(Command::Reset));
        assert_eq!(keycode_to_command(Keycode::Escape), Some(Command::Quit));
        assert_eq!(keycode_to_command(Keycode::Space), None);
    }

    #[test]
    fn test_render_into_offscreen_display() {
        let mut widget = SmileyRating::from_source(&ThemeSource::new(""), Density::new(DEFAULT_DENSITY));
        widget.on_measure(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        render(&mut display, &widget);

        let center = Point::new((SCREEN_WIDTH / 2) as i32, (SCREEN_HEIGHT / 3) as i32);
        assert_eq!(display.get_pixel(center), widget.palette().face);
    }
}
