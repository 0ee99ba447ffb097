#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure input system that translates key presses into world commands.

use tkix_core::{Command, Direction, InputKey};

/// Dispatches toolkit-independent key presses to commands.
#[derive(Debug, Default)]
pub struct Controls;

impl Controls {
    /// Resolves the command bound to a single key.
    #[must_use]
    pub const fn command_for(&self, key: InputKey) -> Command {
        match key {
            InputKey::Left => Command::MoveBox {
                direction: Direction::West,
            },
            InputKey::Up => Command::MoveBox {
                direction: Direction::North,
            },
            InputKey::Right => Command::MoveBox {
                direction: Direction::East,
            },
            InputKey::Down => Command::MoveBox {
                direction: Direction::South,
            },
            InputKey::Space => Command::Advance,
        }
    }

    /// Emits commands for every key pressed during a frame, in arrival order.
    pub fn handle(&self, keys: &[InputKey], out: &mut Vec<Command>) {
        out.extend(keys.iter().map(|key| self.command_for(*key)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_move_the_box() {
        let controls = Controls;
        let expected = [
            (InputKey::Left, Direction::West),
            (InputKey::Up, Direction::North),
            (InputKey::Right, Direction::East),
            (InputKey::Down, Direction::South),
        ];

        for (key, direction) in expected {
            assert_eq!(controls.command_for(key), Command::MoveBox { direction });
        }
    }

    #[test]
    fn space_forces_an_advance() {
        assert_eq!(Controls.command_for(InputKey::Space), Command::Advance);
    }

    #[test]
    fn handle_preserves_arrival_order() {
        let mut commands = Vec::new();

        Controls.handle(&[InputKey::Space, InputKey::Left, InputKey::Space], &mut commands);

        assert_eq!(
            commands,
            vec![
                Command::Advance,
                Command::MoveBox {
                    direction: Direction::West
                },
                Command::Advance,
            ]
        );
    }

    #[test]
    fn no_keys_emit_nothing() {
        let mut commands = Vec::new();
        Controls.handle(&[], &mut commands);
        assert!(commands.is_empty());
    }
}
