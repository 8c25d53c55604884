//! `gamecore::commands` submodule implements command pattern:
//! [`Command`] trait and [`CommandHistory`] that allows undoing and redoing commands.
//!

use crate::mathcore::Vector2;
use log::debug;
use std::{any::type_name, collections::VecDeque, fmt};

/// [`Command`] trait defines reversible actions on target of type `T`.
///
/// # Example
/// ```rust
/// # use ggpatterns::gamecore::commands::Command;
/// struct AddScore(u32);
/// impl Command<u32> for AddScore {
///     fn execute(&mut self, target: &mut u32) {
///         *target += self.0;
///     }
///     fn undo(&mut self, target: &mut u32) {
///         *target -= self.0;
///     }
/// }
/// ```
///
pub trait Command<T> {
    /// Applies command to target.
    ///
    fn execute(&mut self, target: &mut T);
    /// Reverts what [`Command::execute`] did.
    ///
    fn undo(&mut self, target: &mut T);

    /// Returns human-readable name of command.
    ///
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}
impl<T> fmt::Debug for dyn Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Command ({:?})", self.name())
    }
}

/// [`MoveCommand`] struct translates a point by fixed offset.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveCommand {
    /// Translation.
    ///
    pub offset: Vector2,
}
impl Command<Vector2> for MoveCommand {
    fn execute(&mut self, target: &mut Vector2) {
        *target += self.offset;
    }
    fn undo(&mut self, target: &mut Vector2) {
        *target -= self.offset;
    }

    fn name(&self) -> &str {
        "move"
    }
}

/// [`CommandHistory`] struct executes commands and remembers them, so they can be undone and redone.
///
/// History is bounded: once it holds `depth` commands, the oldest ones are forgotten.
/// Executing new command discards everything that could have been redone.
///
/// # Example
/// ```rust
/// # use ggpatterns::gamecore::commands::{CommandHistory, MoveCommand};
/// # use ggpatterns::mathcore::Vector2;
/// let mut position: Vector2 = Vector2::zero();
/// let mut history: CommandHistory<Vector2> = CommandHistory::new(16);
///
/// history.execute(MoveCommand { offset: Vector2 { x: 1.0, y: 0.0 } }, &mut position);
/// history.execute(MoveCommand { offset: Vector2 { x: 0.0, y: 2.0 } }, &mut position);
/// assert_eq!(position, Vector2 { x: 1.0, y: 2.0 });
///
/// assert!(history.undo(&mut position));
/// assert_eq!(position, Vector2 { x: 1.0, y: 0.0 });
/// assert!(history.redo(&mut position));
/// assert_eq!(position, Vector2 { x: 1.0, y: 2.0 });
/// ```
///
pub struct CommandHistory<T> {
    /// Executed commands, the most recent one at the back.
    ///
    done: VecDeque<Box<dyn Command<T>>>,
    /// Undone commands, the most recently undone one at the back.
    ///
    undone: Vec<Box<dyn Command<T>>>,
    /// Maximal number of remembered executed commands.
    ///
    depth: usize,
}
impl<T> CommandHistory<T> {
    /// Creates empty history that remembers at most `depth` commands.
    ///
    pub fn new(depth: usize) -> Self {
        CommandHistory {
            done: VecDeque::new(),
            undone: Vec::new(),
            depth,
        }
    }

    /// Executes command and remembers it.
    ///
    pub fn execute(&mut self, command: impl Command<T> + 'static, target: &mut T) {
        let mut command: Box<dyn Command<T>> = Box::new(command);
        command.execute(target);
        debug!("Executed '{}'", command.name());

        self.undone.clear();
        self.done.push_back(command);
        while self.done.len() > self.depth {
            let _ = self.done.pop_front();
        }
    }
    /// Undoes the most recent command and returns whether there was one.
    ///
    pub fn undo(&mut self, target: &mut T) -> bool {
        let Some(mut command) = self.done.pop_back() else {
            return false;
        };
        command.undo(target);
        debug!("Undone '{}'", command.name());
        self.undone.push(command);
        true
    }
    /// Executes the most recently undone command again and returns whether there was one.
    ///
    pub fn redo(&mut self, target: &mut T) -> bool {
        let Some(mut command) = self.undone.pop() else {
            return false;
        };
        command.execute(target);
        debug!("Redone '{}'", command.name());
        self.done.push_back(command);
        true
    }

    /// Returns whether there is a command to undo.
    ///
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }
    /// Returns whether there is a command to redo.
    ///
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
    /// Returns maximal number of remembered commands.
    ///
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Forgets all commands.
    ///
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
impl<T> fmt::Debug for CommandHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("done", &self.done)
            .field("undone", &self.undone)
            .field("depth", &self.depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandHistory, MoveCommand};
    use crate::mathcore::Vector2;

    /// Command that appends a letter to a string.
    ///
    struct Push(char);
    impl Command<String> for Push {
        fn execute(&mut self, target: &mut String) {
            target.push(self.0);
        }
        fn undo(&mut self, target: &mut String) {
            let _ = target.pop();
        }
    }

    #[test]
    fn undo_redo() {
        let mut text: String = String::new();
        let mut history: CommandHistory<String> = CommandHistory::new(10);
        assert!(!history.undo(&mut text));
        assert!(!history.redo(&mut text));

        history.execute(Push('a'), &mut text);
        history.execute(Push('b'), &mut text);
        history.execute(Push('c'), &mut text);
        assert!(history.undo(&mut text));
        assert!(history.undo(&mut text));
        assert_eq!(text, "a");
        assert!(history.can_redo());

        // new command discards redo stack
        history.execute(Push('x'), &mut text);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut text));
        assert_eq!(text, "ax");

        history.clear();
        assert!(!history.can_undo());
    }

    #[test]
    fn bounded_depth() {
        let mut position: Vector2 = Vector2::zero();
        let mut history: CommandHistory<Vector2> = CommandHistory::new(2);
        for _ in 0..3 {
            history.execute(
                MoveCommand {
                    offset: Vector2 { x: 1.0, y: 1.0 },
                },
                &mut position,
            );
        }
        assert_eq!(position, Vector2 { x: 3.0, y: 3.0 });

        assert!(history.undo(&mut position));
        assert!(history.undo(&mut position));
        assert!(!history.undo(&mut position));
        assert_eq!(position, Vector2::one());

        let mut forgetful: CommandHistory<Vector2> = CommandHistory::new(0);
        forgetful.execute(
            MoveCommand {
                offset: Vector2::one(),
            },
            &mut position,
        );
        assert_eq!(position, Vector2 { x: 2.0, y: 2.0 });
        assert!(!forgetful.can_undo());
        assert_eq!(forgetful.depth(), 0);
    }
}
