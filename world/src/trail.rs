use tkix_core::{Hue, Point, TrailSample, TRAIL_LENGTH};

/// Fixed-capacity ring of the most recent stick positions.
#[derive(Debug)]
pub(crate) struct Trail {
    samples: [TrailSample; TRAIL_LENGTH],
    cursor: usize,
}

impl Trail {
    pub(crate) fn new() -> Self {
        Self {
            samples: [TrailSample::default(); TRAIL_LENGTH],
            cursor: 0,
        }
    }

    /// Overwrites the oldest slot and moves the cursor past it.
    pub(crate) fn record(&mut self, from: Point, to: Point, hue: Hue) {
        self.samples[self.cursor] = TrailSample {
            from,
            to,
            hue: hue.fraction(),
        };
        self.cursor = (self.cursor + 1) % TRAIL_LENGTH;
    }

    /// Moves every sample onto the provided segment, keeping the recorded hues.
    pub(crate) fn collapse(&mut self, from: Point, to: Point) {
        for sample in &mut self.samples {
            sample.from = from;
            sample.to = to;
        }
    }

    pub(crate) const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Samples ordered from oldest to newest, starting at the cursor.
    pub(crate) fn iter_oldest_first(&self) -> impl Iterator<Item = &TrailSample> {
        let (newer, older) = self.samples.split_at(self.cursor);
        older.iter().chain(newer.iter())
    }
}
