use std::time::Duration;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Frame and simulation rates observed over one report interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PaceReport {
    pub(crate) frames_per_second: f64,
    pub(crate) ticks_per_second: f64,
}

/// Compares how often frames arrive with how often the world advances.
#[derive(Debug, Default)]
pub(crate) struct PaceMeter {
    elapsed: Duration,
    frames: u32,
    window_start_tick: u64,
}

impl PaceMeter {
    /// Records a frame that left the world at `tick_index`.
    ///
    /// Returns a report once at least a second of frames has accumulated.
    pub(crate) fn record(&mut self, dt: Duration, tick_index: u64) -> Option<PaceReport> {
        self.elapsed += dt;
        self.frames = self.frames.saturating_add(1);
        if self.elapsed < REPORT_INTERVAL {
            return None;
        }

        let seconds = self.elapsed.as_secs_f64();
        let ticks = tick_index.saturating_sub(self.window_start_tick);
        let report = PaceReport {
            frames_per_second: f64::from(self.frames) / seconds,
            ticks_per_second: ticks as f64 / seconds,
        };

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.window_start_tick = tick_index;
        Some(report)
    }
}
