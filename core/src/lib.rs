#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the TKix catch simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use serde::{Deserialize, Serialize};

/// Title shown while the stick roams free and has never been caught.
pub const WELCOME_TITLE: &str = "TKix catch!";

/// Title shown once both ends of the stick are trapped inside the box.
pub const CAUGHT_TITLE: &str = "Caught TKix!";

/// Number of historical stick positions retained for the trail.
pub const TRAIL_LENGTH: usize = 120;

/// Side length of the square capture box, in arena units.
pub const UNIT_SIZE: f64 = 20.0;

/// Distance between the two ends after the stick is re-randomized.
pub const STICK_LENGTH: f64 = 15.0;

/// Speed magnitude assigned on release at level zero.
pub const BASE_SPEED: f64 = 2.0;

/// Number of discrete hue steps the trail colour cycles through.
pub const HUE_STEPS: u16 = 360;

/// Arena width used before the first surface size is reported.
pub const DEFAULT_ARENA_WIDTH: f64 = 400.0;

/// Arena height used before the first surface size is reported.
pub const DEFAULT_ARENA_HEIGHT: f64 = 200.0;

/// Formats the title announced when a caught stick escapes.
#[must_use]
pub fn released_title(level: u32) -> String {
    format!("TKix released! {level}")
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Adopts the provided drawable surface size as the bounce boundary.
    ResizeArena {
        /// Width of the drawable surface in arena units.
        width: f64,
        /// Height of the drawable surface in arena units.
        height: f64,
    },
    /// Shifts the capture box by one box side in the given direction.
    MoveBox {
        /// Direction of travel for the box.
        direction: Direction,
    },
    /// Advances the simulation by exactly one discrete tick.
    Advance,
    /// Marks the stick as caught after both ends were trapped.
    Catch,
    /// Frees a caught stick, raising the level and scattering its ends.
    Release,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms the arena adopted new dimensions.
    ArenaResized {
        /// Width of the arena after the resize.
        width: f64,
        /// Height of the arena after the resize.
        height: f64,
    },
    /// Confirms the capture box origin after a move request.
    BoxMoved {
        /// Upper-left corner of the box after clamping.
        origin: Point,
    },
    /// Indicates that the simulation advanced by one tick.
    Advanced {
        /// Number of ends found inside the capture box during the tick.
        caught_ends: u8,
    },
    /// Announces that both ends were caught.
    Caught,
    /// Announces that a caught stick broke free.
    Released {
        /// Level reached after the release.
        level: u32,
    },
}

/// Capture state of the stick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// At least one end is outside the capture box.
    #[default]
    Free,
    /// Both ends were trapped and have not escaped yet.
    Caught,
}

/// Cardinal directions the capture box can travel in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing y coordinates.
    North,
    /// Movement toward increasing x coordinates.
    East,
    /// Movement toward increasing y coordinates.
    South,
    /// Movement toward decreasing x coordinates.
    West,
}

/// Keyboard keys the simulation reacts to, independent of any windowing toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Right arrow.
    Right,
    /// Down arrow.
    Down,
    /// Space bar.
    Space,
}

/// Location within the arena expressed in floating point arena units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Per-tick displacement of an end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Creates a new velocity.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Builds a velocity from a speed magnitude and heading in radians.
    #[must_use]
    pub fn from_polar(speed: f64, heading: f64) -> Self {
        Self::new(speed * heading.cos(), speed * heading.sin())
    }

    /// Horizontal displacement per tick.
    #[must_use]
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    /// Vertical displacement per tick.
    #[must_use]
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    /// Magnitude of the velocity.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Rectangular bounce boundary covering `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f64,
    height: f64,
}

impl Arena {
    /// Creates a new arena description.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal extent of the arena.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent of the arena.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Reports whether the point lies inside the half-open arena bounds.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < self.width && point.y < self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT)
    }
}

/// Player-controlled square that traps ends lying within its covering rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureBox {
    origin: Point,
    size: f64,
}

impl CaptureBox {
    /// Creates a new capture box anchored at its upper-left corner.
    #[must_use]
    pub const fn new(origin: Point, size: f64) -> Self {
        Self { origin, size }
    }

    /// Upper-left corner of the box.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Side length of the box.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Reports whether the point lies in `[x, x + size) x [y, y + size)`.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size
            && point.y < self.origin.y + self.size
    }
}

/// Immutable snapshot of one stick end used for queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndSnapshot {
    /// Current position of the end.
    pub position: Point,
    /// Displacement applied on the next free tick.
    pub velocity: Velocity,
}

/// Historical stick position recorded once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    /// Position of the first end when the sample was taken.
    pub from: Point,
    /// Position of the second end when the sample was taken.
    pub to: Point,
    /// Hue fraction in `[0, 1)` assigned when the sample was taken.
    pub hue: f64,
}

/// Position on the integer colour wheel, always within `[0, HUE_STEPS)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hue(u16);

impl Hue {
    /// Creates a hue, wrapping values outside the wheel.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value % HUE_STEPS)
    }

    /// Integer position on the wheel.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Hue expressed as a fraction of the full wheel.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(HUE_STEPS)
    }

    /// Next step on the wheel.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % HUE_STEPS)
    }
}

/// Colour with red, green and blue channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    /// Red channel intensity.
    pub red: f64,
    /// Green channel intensity.
    pub green: f64,
    /// Blue channel intensity.
    pub blue: f64,
}

impl Rgb {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Maps a hue fraction onto a fully saturated three-segment colour wheel.
///
/// The wheel ramps red to green, green to blue and blue back to red. Inputs
/// outside `[0, 1]` produce black.
#[must_use]
pub fn hue_to_rgb(hue: f64) -> Rgb {
    let h = hue * 3.0;
    if (0.0..1.0).contains(&h) {
        Rgb::new(1.0 - h, h, 0.0)
    } else if (1.0..2.0).contains(&h) {
        Rgb::new(0.0, 2.0 - h, h - 1.0)
    } else if (2.0..=3.0).contains(&h) {
        Rgb::new(h - 2.0, 0.0, 3.0 - h)
    } else {
        Rgb::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::de::DeserializeOwned;

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let tolerance = 1e-12;
        assert!(
            (actual.red - expected.red).abs() < tolerance
                && (actual.green - expected.green).abs() < tolerance
                && (actual.blue - expected.blue).abs() < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn hue_wheel_hits_primaries_at_segment_joins() {
        assert_eq!(hue_to_rgb(0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_rgb_close(hue_to_rgb(1.0 / 3.0), Rgb::new(0.0, 1.0, 0.0));
        assert_rgb_close(hue_to_rgb(2.0 / 3.0), Rgb::new(0.0, 0.0, 1.0));
        assert_rgb_close(hue_to_rgb(1.0), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn hue_wheel_blends_between_primaries() {
        assert_rgb_close(hue_to_rgb(1.0 / 6.0), Rgb::new(0.5, 0.5, 0.0));
        assert_rgb_close(hue_to_rgb(0.5), Rgb::new(0.0, 0.5, 0.5));
        assert_rgb_close(hue_to_rgb(5.0 / 6.0), Rgb::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn hue_outside_wheel_is_black() {
        assert_eq!(hue_to_rgb(-0.1), Rgb::default());
        assert_eq!(hue_to_rgb(1.5), Rgb::default());
    }

    #[test]
    fn hue_counter_wraps_after_full_turn() {
        let mut hue = Hue::default();
        for _ in 0..HUE_STEPS {
            hue = hue.next();
        }
        assert_eq!(hue, Hue::default());
        assert_eq!(Hue::new(359).next().get(), 0);
        assert_eq!(Hue::new(400).get(), 40);
        assert!((Hue::new(180).fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn capture_box_covers_half_open_square() {
        let capture_box = CaptureBox::new(Point::new(10.0, 20.0), UNIT_SIZE);

        assert!(capture_box.contains(Point::new(10.0, 20.0)));
        assert!(capture_box.contains(Point::new(29.999, 39.999)));
        assert!(!capture_box.contains(Point::new(30.0, 25.0)));
        assert!(!capture_box.contains(Point::new(15.0, 40.0)));
        assert!(!capture_box.contains(Point::new(9.999, 25.0)));
    }

    #[test]
    fn arena_excludes_far_edges() {
        let arena = Arena::default();

        assert!(arena.contains(Point::new(0.0, 0.0)));
        assert!(arena.contains(Point::new(399.0, 199.0)));
        assert!(!arena.contains(Point::new(400.0, 10.0)));
        assert!(!arena.contains(Point::new(10.0, -0.5)));
    }

    #[test]
    fn released_title_embeds_level() {
        assert_eq!(released_title(3), "TKix released! 3");
    }

    #[test]
    fn command_round_trips_through_bincode() {
        assert_round_trip(&Command::MoveBox {
            direction: Direction::West,
        });
        assert_round_trip(&Command::ResizeArena {
            width: 640.0,
            height: 480.0,
        });
    }

    #[test]
    fn event_round_trips_through_bincode() {
        assert_round_trip(&Event::Released { level: 7 });
        assert_round_trip(&Event::BoxMoved {
            origin: Point::new(40.0, 60.0),
        });
    }

    proptest! {
        #[test]
        fn hue_channels_stay_within_unit_range(hue in 0.0f64..1.0) {
            let rgb = hue_to_rgb(hue);
            for channel in [rgb.red, rgb.green, rgb.blue] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
            prop_assert!((rgb.red + rgb.green + rgb.blue - 1.0).abs() < 1e-9);
        }
    }
}
