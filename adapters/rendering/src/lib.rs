#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for TKix adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use std::time::Duration;
use thiserror::Error;
use tkix_core::{hue_to_rgb, CaptureBox, InputKey, Point, TrailSample, WELCOME_TITLE};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from a position on the trail colour wheel.
    #[must_use]
    pub fn from_hue(hue: f64) -> Self {
        let rgb = hue_to_rgb(hue);
        Self::new(rgb.red as f32, rgb.green as f32, rgb.blue as f32, 1.0)
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Keys pressed since the previous frame, in arrival order.
    pub keys: Vec<InputKey>,
    /// Current size of the drawable surface in pixels.
    pub surface_size: Vec2,
}

/// Filled square marking the player's capture box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureBoxPresentation {
    /// Upper-left corner in surface coordinates.
    pub origin: Vec2,
    /// Side length of the square.
    pub size: f32,
    /// Fill color.
    pub color: Color,
}

impl CaptureBoxPresentation {
    /// Describes the provided capture box filled with `color`.
    #[must_use]
    pub fn new(capture_box: CaptureBox, color: Color) -> Self {
        Self {
            origin: to_vec2(capture_box.origin()),
            size: capture_box.size() as f32,
            color,
        }
    }
}

/// Single historical stick position drawn as a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    /// Position of the first end.
    pub from: Vec2,
    /// Position of the second end.
    pub to: Vec2,
    /// Stroke color derived from the sample's hue.
    pub color: Color,
}

impl TrailSegment {
    /// Converts a recorded trail sample into a drawable segment.
    #[must_use]
    pub fn from_sample(sample: &TrailSample) -> Self {
        Self {
            from: to_vec2(sample.from),
            to: to_vec2(sample.to),
            color: Color::from_hue(sample.hue),
        }
    }
}

fn to_vec2(point: Point) -> Vec2 {
    Vec2::new(point.x() as f32, point.y() as f32)
}

/// Scene description combining the capture box, trail and title text.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Title text reflecting the capture state.
    pub title: String,
    /// Capture box drawn beneath the trail.
    pub capture_box: CaptureBoxPresentation,
    /// Trail segments ordered from oldest to newest.
    pub trail: Vec<TrailSegment>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new<T>(
        title: T,
        capture_box: CaptureBoxPresentation,
        trail: Vec<TrailSegment>,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            capture_box,
            trail,
        }
    }

    /// Rebuilds the trail from samples ordered oldest to newest, reusing the allocation.
    pub fn replace_trail<'a, I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = &'a TrailSample>,
    {
        self.trail.clear();
        self.trail
            .extend(samples.into_iter().map(TrailSegment::from_sample));
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Default window width in pixels.
    pub const DEFAULT_WINDOW_WIDTH: u32 = 400;

    /// Default window height in pixels.
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 200;

    /// Constructs a new presentation descriptor with the default window size.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            window_width: Self::DEFAULT_WINDOW_WIDTH,
            window_height: Self::DEFAULT_WINDOW_HEIGHT,
            scene,
        }
    }

    /// Requests a specific initial window size.
    ///
    /// Returns an error when either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Result<Self, RenderingError> {
        if width == 0 || height == 0 {
            return Err(RenderingError::InvalidWindowSize { width, height });
        }
        self.window_width = width;
        self.window_height = height;
        Ok(self)
    }

    /// Presentation titled for a fresh game.
    #[must_use]
    pub fn welcome(scene: Scene) -> Self {
        Self::new(WELCOME_TITLE, Color::WHITE, scene)
    }
}

/// Rendering backend capable of presenting TKix scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the wall-clock frame
    /// delta and the per-frame input captured by the adapter, and may mutate
    /// the scene before it is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderingError {
    /// Windows must have a positive area.
    #[error("window size must be positive (received {width}x{height})")]
    InvalidWindowSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkix_core::UNIT_SIZE;

    fn sample(hue: f64) -> TrailSample {
        TrailSample {
            from: Point::new(1.0, 2.0),
            to: Point::new(3.0, 4.0),
            hue,
        }
    }

    fn empty_scene() -> Scene {
        Scene::new(
            WELCOME_TITLE,
            CaptureBoxPresentation::new(
                CaptureBox::new(Point::new(0.0, 0.0), UNIT_SIZE),
                Color::BLACK,
            ),
            Vec::new(),
        )
    }

    #[test]
    fn hue_colors_are_opaque_primaries() {
        assert_eq!(Color::from_hue(0.0), Color::new(1.0, 0.0, 0.0, 1.0));
        let green = Color::from_hue(1.0 / 3.0);
        assert!((green.green - 1.0).abs() < 1e-6);
        assert!(green.red.abs() < 1e-6);
        assert_eq!(green.alpha, 1.0);
    }

    #[test]
    fn trail_segment_copies_endpoints() {
        let segment = TrailSegment::from_sample(&sample(0.0));

        assert_eq!(segment.from, Vec2::new(1.0, 2.0));
        assert_eq!(segment.to, Vec2::new(3.0, 4.0));
        assert_eq!(segment.color, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn capture_box_presentation_mirrors_box() {
        let presentation = CaptureBoxPresentation::new(
            CaptureBox::new(Point::new(380.0, 180.0), UNIT_SIZE),
            Color::BLACK,
        );

        assert_eq!(presentation.origin, Vec2::new(380.0, 180.0));
        assert_eq!(presentation.size, 20.0);
    }

    #[test]
    fn replace_trail_keeps_sample_order() {
        let mut scene = empty_scene();
        let samples = [sample(0.0), sample(0.5)];

        scene.replace_trail(samples.iter());
        scene.replace_trail(samples.iter());

        assert_eq!(scene.trail.len(), 2);
        assert_eq!(scene.trail[1].color, Color::from_hue(0.5));
    }

    #[test]
    fn presentation_defaults_to_small_white_window() {
        let presentation = Presentation::welcome(empty_scene());

        assert_eq!(presentation.window_title, WELCOME_TITLE);
        assert_eq!(presentation.window_width, 400);
        assert_eq!(presentation.window_height, 200);
        assert_eq!(presentation.clear_color, Color::WHITE);
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let error = Presentation::welcome(empty_scene())
            .with_window_size(0, 200)
            .expect_err("zero width must be rejected");

        assert_eq!(
            error,
            RenderingError::InvalidWindowSize {
                width: 0,
                height: 200
            }
        );
        assert_eq!(
            error.to_string(),
            "window size must be positive (received 0x200)"
        );
    }
}
