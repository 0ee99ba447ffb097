#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure capture system that turns tick results into catch and release commands.

use tkix_core::{Command, Event, Phase};

const ENDS_PER_STICK: u8 = 2;

/// Reacts to the advance performed by a redraw.
///
/// While both ends sit in the box the stick struggles: every redraw requests
/// an extra advance. The first such redraw also marks the stick as caught.
/// Once a caught stick reports fewer than two trapped ends it is released.
#[derive(Debug, Default)]
pub struct Capture;

impl Capture {
    /// Consumes the events produced by a single redraw advance.
    ///
    /// Commands emitted here must not be fed back into the system during the
    /// same redraw, otherwise the extra advance would chain indefinitely.
    pub fn handle(&self, events: &[Event], phase: Phase, out: &mut Vec<Command>) {
        let Some(caught_ends) = latest_capture_count(events) else {
            return;
        };

        if caught_ends == ENDS_PER_STICK {
            out.push(Command::Advance);
            if phase == Phase::Free {
                out.push(Command::Catch);
            }
        } else if phase == Phase::Caught {
            out.push(Command::Release);
        }
    }
}

fn latest_capture_count(events: &[Event]) -> Option<u8> {
    events.iter().rev().find_map(|event| match event {
        Event::Advanced { caught_ends } => Some(*caught_ends),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[Event], phase: Phase) -> Vec<Command> {
        let mut commands = Vec::new();
        Capture.handle(events, phase, &mut commands);
        commands
    }

    #[test]
    fn ignores_batches_without_advance() {
        assert!(run(&[Event::Caught], Phase::Caught).is_empty());
    }

    #[test]
    fn first_full_capture_doubles_speed_and_catches() {
        let commands = run(&[Event::Advanced { caught_ends: 2 }], Phase::Free);
        assert_eq!(commands, vec![Command::Advance, Command::Catch]);
    }

    #[test]
    fn sustained_capture_only_doubles_speed() {
        let commands = run(&[Event::Advanced { caught_ends: 2 }], Phase::Caught);
        assert_eq!(commands, vec![Command::Advance]);
    }

    #[test]
    fn partial_capture_releases_caught_stick() {
        let commands = run(&[Event::Advanced { caught_ends: 1 }], Phase::Caught);
        assert_eq!(commands, vec![Command::Release]);
    }

    #[test]
    fn partial_capture_of_free_stick_is_quiet() {
        assert!(run(&[Event::Advanced { caught_ends: 1 }], Phase::Free).is_empty());
        assert!(run(&[Event::Advanced { caught_ends: 0 }], Phase::Free).is_empty());
    }

    #[test]
    fn uses_most_recent_advance() {
        let events = [
            Event::Advanced { caught_ends: 2 },
            Event::Advanced { caught_ends: 0 },
        ];
        assert_eq!(run(&events, Phase::Caught), vec![Command::Release]);
    }
}
