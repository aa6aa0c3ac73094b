use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Moves executed during one attempt.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovesErr {
    InvalidChar(usize, char),
}

impl Display for MovesErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MovesErr::InvalidChar(i, c) => {
                write!(f, "Invalid move '{}' at {} - expected one of lurdLURD", c, i)
            }
        }
    }
}

impl Error for MovesErr {}

/// Directions requested by the user, whether they push is only known once they're played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dirs(pub Vec<Dir>);

impl FromStr for Dirs {
    type Err = MovesErr;

    /// Whitespace is skipped so long solutions can be wrapped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dirs = Vec::new();
        for (i, c) in s.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let dir = Dir::from_char(c).ok_or(MovesErr::InvalidChar(i, c))?;
            dirs.push(dir);
        }
        Ok(Dirs(dirs))
    }
}

impl From<&Moves> for Dirs {
    fn from(moves: &Moves) -> Self {
        Dirs(moves.iter().map(|m| m.dir).collect())
    }
}
