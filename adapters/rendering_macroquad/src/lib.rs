#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for TKix.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! Macroquad cannot retitle a window after it opens, so the scene title is
//! drawn as text in the top-left corner instead.

mod input;

pub use self::input::{input_key_for, pressed_input_keys};

use self::input::KeyboardShortcuts;
use anyhow::Result;
use glam::Vec2;
use macroquad::{
    color::Color as MacroquadColor,
    shapes::{draw_line, draw_rectangle},
    text::draw_text,
};
use std::time::Duration;
use tkix_rendering::{
    CaptureBoxPresentation, Color, FrameInput, Presentation, RenderingBackend, Scene,
    TrailSegment,
};

const TRAIL_THICKNESS: f32 = 1.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const TITLE_MARGIN: f32 = 4.0;
const TITLE_COLOR: Color = Color::new(0.25, 0.25, 0.25, 1.0);

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self { swap_interval } = self;

        let Presentation {
            window_title,
            clear_color,
            window_width,
            window_height,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: i32::try_from(window_width).unwrap_or(i32::MAX),
            window_height: i32::try_from(window_height).unwrap_or(i32::MAX),
            window_resizable: true,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        log::info!("opening {window_width}x{window_height} window");
        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    log::info!("quit requested");
                    break;
                }

                macroquad::window::clear_background(background);

                let surface_size = Vec2::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let frame_input = FrameInput {
                    keys: keyboard.keys,
                    surface_size,
                };

                update_scene(frame_dt, frame_input, &mut scene);

                draw_capture_box(&scene.capture_box);
                draw_trail(&scene.trail);
                draw_title(&scene.title);

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn draw_capture_box(capture_box: &CaptureBoxPresentation) {
    draw_rectangle(
        capture_box.origin.x,
        capture_box.origin.y,
        capture_box.size,
        capture_box.size,
        to_macroquad_color(capture_box.color),
    );
}

fn draw_trail(trail: &[TrailSegment]) {
    for segment in trail {
        draw_line(
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            TRAIL_THICKNESS,
            to_macroquad_color(segment.color),
        );
    }
}

fn draw_title(title: &str) {
    let _ = draw_text(
        title,
        TITLE_MARGIN,
        TITLE_MARGIN + TITLE_FONT_SIZE * 0.75,
        TITLE_FONT_SIZE,
        to_macroquad_color(TITLE_COLOR),
    );
}

fn to_macroquad_color(color: Color) -> MacroquadColor {
    MacroquadColor::new(color.red, color.green, color.blue, color.alpha)
}
