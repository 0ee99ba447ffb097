#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for the TKix catch game.

mod trail;

use std::f64::consts::{FRAC_PI_4, TAU};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tkix_core::{
    released_title, Arena, CaptureBox, Command, Direction, Event, Hue, Phase, Point, Velocity,
    BASE_SPEED, CAUGHT_TITLE, STICK_LENGTH, UNIT_SIZE, WELCOME_TITLE,
};

use self::trail::Trail;

const DEFAULT_SEED: u64 = 0x7b1c_2e90_5d43_a6f1;

const INITIAL_ENDS: [End; 2] = [
    End::new(Point::new(10.0, 10.0), Velocity::new(2.0, 1.0)),
    End::new(Point::new(10.0, 25.0), Velocity::new(1.0, 2.0)),
];

/// Advances a coordinate by one step and reflects it off the `[0, limit)` bounds.
///
/// Positions that overshoot are pinned to `limit - 1` or `0`. The velocity
/// only flips when it still points past the violated bound.
#[must_use]
pub fn step_and_bounce(position: f64, velocity: f64, limit: f64) -> (f64, f64) {
    let next = position + velocity;
    if next >= limit {
        let velocity = if velocity > 0.0 { -velocity } else { velocity };
        ((limit - 1.0).max(0.0), velocity)
    } else if next < 0.0 {
        let velocity = if velocity < 0.0 { -velocity } else { velocity };
        (0.0, velocity)
    } else {
        (next, velocity)
    }
}

/// Pins a coordinate that lies outside `[0, limit)` to the nearest edge.
fn confine(coordinate: f64, limit: f64) -> f64 {
    if coordinate >= limit {
        (limit - 1.0).max(0.0)
    } else if coordinate < 0.0 {
        0.0
    } else {
        coordinate
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct End {
    position: Point,
    velocity: Velocity,
}

impl End {
    const fn new(position: Point, velocity: Velocity) -> Self {
        Self { position, velocity }
    }

    fn step(&mut self, arena: Arena) {
        let (x, dx) = step_and_bounce(self.position.x(), self.velocity.dx(), arena.width());
        let (y, dy) = step_and_bounce(self.position.y(), self.velocity.dy(), arena.height());
        self.position = Point::new(x, y);
        self.velocity = Velocity::new(dx, dy);
    }

    fn confine(&mut self, arena: Arena) {
        if !arena.contains(self.position) {
            self.position = Point::new(
                confine(self.position.x(), arena.width()),
                confine(self.position.y(), arena.height()),
            );
        }
    }
}

/// Represents the authoritative TKix simulation state.
#[derive(Debug)]
pub struct World {
    arena: Arena,
    ends: [End; 2],
    capture_box: CaptureBox,
    trail: Trail,
    hue: Hue,
    caught_ends: u8,
    phase: Phase,
    level: u32,
    title: String,
    rng: ChaCha8Rng,
    tick_index: u64,
}

impl World {
    /// Creates a new world seeded with the default random stream.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a new world whose releases draw from the provided seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let arena = Arena::default();
        let origin = Point::new(arena.width() - UNIT_SIZE, arena.height() - UNIT_SIZE);
        Self {
            arena,
            ends: INITIAL_ENDS,
            capture_box: CaptureBox::new(origin, UNIT_SIZE),
            trail: Trail::new(),
            hue: Hue::default(),
            caught_ends: 0,
            phase: Phase::Free,
            level: 0,
            title: WELCOME_TITLE.to_owned(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick_index: 0,
        }
    }

    fn advance(&mut self) -> u8 {
        let [first, second] = self.ends;
        self.trail.record(first.position, second.position, self.hue);
        self.hue = self.hue.next();
        self.tick_index = self.tick_index.saturating_add(1);

        let arena = self.arena;
        let capture_box = self.capture_box;
        let mut caught_ends = 0;
        for end in &mut self.ends {
            if capture_box.contains(end.position) {
                caught_ends += 1;
            } else {
                end.step(arena);
            }
        }
        self.caught_ends = caught_ends;
        caught_ends
    }

    fn move_box(&mut self, direction: Direction) -> Point {
        let size = self.capture_box.size();
        let origin = self.capture_box.origin();
        let (mut x, mut y) = (origin.x(), origin.y());
        match direction {
            Direction::West => {
                x -= size;
                if x < 0.0 {
                    x = 0.0;
                }
            }
            Direction::North => {
                y -= size;
                if y < 0.0 {
                    y = 0.0;
                }
            }
            Direction::East => {
                x += size;
                if x + size > self.arena.width() {
                    x = (self.arena.width() - size).max(0.0);
                }
            }
            Direction::South => {
                y += size;
                if y + size > self.arena.height() {
                    y = (self.arena.height() - size).max(0.0);
                }
            }
        }
        let origin = Point::new(x, y);
        self.capture_box = CaptureBox::new(origin, size);
        origin
    }

    fn release(&mut self) {
        self.phase = Phase::Free;
        self.level = self.level.saturating_add(1);
        self.title = released_title(self.level);
        self.randomize_stick();
        let [first, second] = self.ends;
        self.trail.collapse(first.position, second.position);
    }

    fn randomize_stick(&mut self) {
        let anchor = Point::new(
            anchor_coordinate(&mut self.rng, self.arena.width()),
            anchor_coordinate(&mut self.rng, self.arena.height()),
        );
        let spread: f64 = self.rng.gen_range(0.0..TAU);
        let partner = Point::new(
            confine(anchor.x() + spread.cos() * STICK_LENGTH, self.arena.width()),
            confine(anchor.y() + spread.sin() * STICK_LENGTH, self.arena.height()),
        );

        let speed = BASE_SPEED + f64::from(self.level);
        let heading: f64 = self.rng.gen_range(0.0..TAU);
        let divergence: f64 = self.rng.gen_range(FRAC_PI_4..=3.0 * FRAC_PI_4);

        self.ends = [
            End::new(anchor, Velocity::from_polar(speed, heading)),
            End::new(partner, Velocity::from_polar(speed, heading + divergence)),
        ];
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws an anchor coordinate that keeps a full stick length from both edges.
fn anchor_coordinate(rng: &mut ChaCha8Rng, limit: f64) -> f64 {
    let span = limit - 2.0 * STICK_LENGTH;
    if span > 0.0 {
        rng.gen::<f64>() * span + STICK_LENGTH
    } else {
        (limit / 2.0).max(0.0)
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ResizeArena { width, height } => {
            let arena = Arena::new(width, height);
            if arena != world.arena {
                world.arena = arena;
                for end in &mut world.ends {
                    end.confine(arena);
                }
                out_events.push(Event::ArenaResized { width, height });
            }
        }
        Command::MoveBox { direction } => {
            let origin = world.move_box(direction);
            out_events.push(Event::BoxMoved { origin });
        }
        Command::Advance => {
            let caught_ends = world.advance();
            out_events.push(Event::Advanced { caught_ends });
        }
        Command::Catch => {
            if world.phase == Phase::Free {
                world.phase = Phase::Caught;
                CAUGHT_TITLE.clone_into(&mut world.title);
                out_events.push(Event::Caught);
            }
        }
        Command::Release => {
            if world.phase == Phase::Caught {
                world.release();
                out_events.push(Event::Released { level: world.level });
            }
        }
    }
}

/// Query functions that expose read-only views of the world.
pub mod query {
    use super::World;
    use tkix_core::{Arena, CaptureBox, EndSnapshot, Hue, Phase, TrailSample};

    /// Retrieves the title adapters should display.
    #[must_use]
    pub fn title(world: &World) -> &str {
        &world.title
    }

    /// Provides the current bounce boundary.
    #[must_use]
    pub fn arena(world: &World) -> Arena {
        world.arena
    }

    /// Provides the current capture box.
    #[must_use]
    pub fn capture_box(world: &World) -> CaptureBox {
        world.capture_box
    }

    /// Captures both stick ends.
    #[must_use]
    pub fn ends(world: &World) -> [EndSnapshot; 2] {
        world.ends.map(|end| EndSnapshot {
            position: end.position,
            velocity: end.velocity,
        })
    }

    /// Iterates the trail from the oldest to the newest sample.
    pub fn trail(world: &World) -> impl Iterator<Item = &TrailSample> {
        world.trail.iter_oldest_first()
    }

    /// Index of the slot the next tick will overwrite.
    #[must_use]
    pub fn trail_cursor(world: &World) -> usize {
        world.trail.cursor()
    }

    /// Hue that the next trail sample will carry.
    #[must_use]
    pub fn hue(world: &World) -> Hue {
        world.hue
    }

    /// Number of ends trapped during the most recent tick.
    #[must_use]
    pub fn caught_ends(world: &World) -> u8 {
        world.caught_ends
    }

    /// Current capture phase.
    #[must_use]
    pub fn phase(world: &World) -> Phase {
        world.phase
    }

    /// Number of completed catch-and-release cycles.
    #[must_use]
    pub fn level(world: &World) -> u32 {
        world.level
    }

    /// Number of ticks simulated since creation.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }
}
