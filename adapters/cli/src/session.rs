use std::time::Duration;

use glam::Vec2;
use tkix_core::{Command, Event, TRAIL_LENGTH};
use tkix_rendering::{CaptureBoxPresentation, Color, FrameInput, Scene};
use tkix_system_capture::Capture;
use tkix_system_controls::Controls;
use tkix_world::{self as world, query, World};

use crate::pace::PaceMeter;

/// Requests a redraw every time a full period of frame time has accumulated.
#[derive(Debug)]
pub(crate) struct RepaintTimer {
    period: Duration,
    accumulated: Duration,
}

impl RepaintTimer {
    pub(crate) const fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    /// Adds elapsed time and reports whether at least one period completed.
    ///
    /// Several completed periods collapse into a single redraw request.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        if self.period.is_zero() {
            return true;
        }

        self.accumulated = self.accumulated.saturating_add(dt);
        let mut due = false;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            due = true;
        }
        due
    }
}

/// Owns the world and systems and drives them from backend frames.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    capture: Capture,
    controls: Controls,
    timer: RepaintTimer,
    pace: Option<PaceMeter>,
    commands: Vec<Command>,
    events: Vec<Event>,
}

impl Session {
    pub(crate) fn new(seed: u64, tick_interval: Duration) -> Self {
        Self {
            world: World::with_seed(seed),
            capture: Capture,
            controls: Controls,
            timer: RepaintTimer::new(tick_interval),
            pace: None,
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Logs frame and tick rates once per second when enabled.
    #[must_use]
    pub(crate) fn with_pace_reporting(mut self, enabled: bool) -> Self {
        self.pace = enabled.then(PaceMeter::default);
        self
    }

    /// Builds the scene shown before the first redraw.
    pub(crate) fn scene(&self) -> Scene {
        let mut scene = Scene::new(
            query::title(&self.world),
            CaptureBoxPresentation::new(query::capture_box(&self.world), Color::BLACK),
            Vec::with_capacity(TRAIL_LENGTH),
        );
        self.populate_scene(&mut scene);
        scene
    }

    /// Handles one backend frame: key presses first, then a redraw when a
    /// key was pressed or the repaint timer fired.
    pub(crate) fn frame(&mut self, dt: Duration, input: FrameInput, scene: &mut Scene) {
        self.commands.clear();
        self.controls.handle(&input.keys, &mut self.commands);
        self.events.clear();
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.events);
        }
        log_events(&self.events);

        let timer_due = self.timer.advance(dt);
        if timer_due || !input.keys.is_empty() {
            self.redraw(input.surface_size);
            self.populate_scene(scene);
        }

        if let Some(pace) = self.pace.as_mut() {
            if let Some(report) = pace.record(dt, query::tick_index(&self.world)) {
                log::info!(
                    "{:.1} fps, {:.1} ticks/s, level {}",
                    report.frames_per_second,
                    report.ticks_per_second,
                    query::level(&self.world)
                );
            }
        }
    }

    /// Advances the world once and lets the capture system react.
    fn redraw(&mut self, surface_size: Vec2) {
        self.events.clear();
        if surface_size.x > 0.0 && surface_size.y > 0.0 {
            world::apply(
                &mut self.world,
                Command::ResizeArena {
                    width: f64::from(surface_size.x),
                    height: f64::from(surface_size.y),
                },
                &mut self.events,
            );
        }
        world::apply(&mut self.world, Command::Advance, &mut self.events);

        self.commands.clear();
        self.capture
            .handle(&self.events, query::phase(&self.world), &mut self.commands);
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.events);
        }
        log_events(&self.events);
    }

    fn populate_scene(&self, scene: &mut Scene) {
        scene.title.clear();
        scene.title.push_str(query::title(&self.world));
        scene.capture_box =
            CaptureBoxPresentation::new(query::capture_box(&self.world), Color::BLACK);
        scene.replace_trail(query::trail(&self.world));
    }
}

fn log_events(events: &[Event]) {
    for event in events {
        match event {
            Event::Caught => log::info!("stick caught"),
            Event::Released { level } => log::info!("stick released, level {level}"),
            Event::Advanced { caught_ends } => log::trace!("advanced, {caught_ends} ends trapped"),
            Event::BoxMoved { origin } => {
                log::debug!("box moved to ({}, {})", origin.x(), origin.y());
            }
            Event::ArenaResized { width, height } => {
                log::debug!("arena resized to {width}x{height}");
            }
        }
    }
}
