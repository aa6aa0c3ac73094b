use std::fmt::{self, Debug, Display, Formatter};

use crate::arena::Arena;
use crate::config::Format;
use crate::moves::Moves;

/// Prints the boards an attempt went through, starting from `initial`.
pub struct ReplayFormatter<'a> {
    initial: &'a Arena,
    moves: &'a Moves,
    include_steps: bool,
    format: Format,
}

impl<'a> ReplayFormatter<'a> {
    pub fn new(initial: &'a Arena, moves: &'a Moves, include_steps: bool, format: Format) -> Self {
        Self {
            initial,
            moves,
            include_steps,
            format,
        }
    }
}

impl Display for ReplayFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial.format(self.format))?;
        let mut arena = self.initial.clone();
        for (i, &mov) in self.moves.iter().enumerate() {
            // moves from a different level or starting position
            if arena.move_player(mov.dir) != Some(mov) {
                return writeln!(f, "Move {} ({}) doesn't match the board", i + 1, mov);
            }
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", arena.format(self.format))?;
            }
        }
        Ok(())
    }
}

impl Debug for ReplayFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
