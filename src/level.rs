use std::convert::Infallible;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, warn};

use crate::arena::{Arena, ArenaErr};
use crate::data::{Pos, Tile};
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    NoSuchLevel { index: usize, count: usize },
    Tile(ArenaErr),
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::NoSuchLevel { index, count } => {
                write!(f, "No level {} - there are {} levels", index, count)
            }
            LevelErr::Tile(err) => write!(f, "Bad level data: {}", err),
        }
    }
}

impl Error for LevelErr {}

impl From<ArenaErr> for LevelErr {
    fn from(err: ArenaErr) -> Self {
        LevelErr::Tile(err)
    }
}

/// One level as read from the document, before it's played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    title: Option<String>,
    width: usize,
    height: usize,
    text: String,
}

impl LevelRecord {
    pub(crate) fn new(title: Option<String>, width: usize, height: usize, text: String) -> Self {
        LevelRecord {
            title,
            width,
            height,
            text,
        }
    }

    /// The comment line the level followed, without the `;`.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows, each followed by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn to_arena(&self) -> Result<Arena, ArenaErr> {
        let players = self.text.chars().filter(|&c| c == '@' || c == '?').count();
        match players {
            0 => warn!("Level has no player, starting at [0, 0]"),
            1 => {}
            n => warn!("Level has {} players, using the last one", n),
        }

        let mut arena = Arena::new(self.width, self.height);
        let (mut x, mut y) = (0, 0);
        for c in self.text.chars() {
            if c == '\n' {
                x = 0;
                y += 1;
            } else {
                arena.set_tile(Pos::new(x, y), Tile::from_char(c))?;
                x += 1;
            }
        }
        Ok(arena)
    }
}

/// Levels in the order they appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelList(Vec<LevelRecord>);

impl LevelList {
    pub fn parse(text: &str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Never fails, a read error ends the document early.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let records = parser::read_levels(reader);
        debug!("Read {} levels", records.len());
        LevelList(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, LevelRecord> {
        self.0.iter()
    }

    /// Builds a fresh arena for the level at `index`.
    pub fn select(&self, index: usize) -> Result<Arena, LevelErr> {
        let record = self.get(index).ok_or(LevelErr::NoSuchLevel {
            index,
            count: self.len(),
        })?;
        Ok(record.to_arena()?)
    }
}

impl FromStr for LevelList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LevelList::parse(s))
    }
}

impl<'a> IntoIterator for &'a LevelList {
    type Item = &'a LevelRecord;
    type IntoIter = ::std::slice::Iter<'a, LevelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;

    const ORIGINAL_1: &str = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";

    #[test]
    fn selecting_level() {
        let levels = LevelList::parse("; L1\n#####\n#@$.#\n#####\n");
        assert_eq!(levels.len(), 1);

        let record = levels.get(0).unwrap();
        assert_eq!(record.title(), Some("L1"));
        assert_eq!(record.width(), 5);
        assert_eq!(record.height(), 3);
        assert_eq!(record.text(), "#####\n#@$.#\n#####\n");

        let arena = levels.select(0).unwrap();
        assert_eq!(arena.width(), 5);
        assert_eq!(arena.height(), 3);
        assert_eq!(arena.player_pos(), Pos::new(1, 1));
        assert_eq!(arena.tile(Pos::new(0, 1)), Tile::WALL);
        assert_eq!(arena.tile(Pos::new(2, 1)), Tile::CRATE);
        assert_eq!(arena.tile(Pos::new(3, 1)), Tile::GOAL);
        assert_eq!(arena.moves(), 0);
    }

    #[test]
    fn selecting_missing_level() {
        let levels = LevelList::parse("; L1\n#####\n#@$.#\n#####\n");
        assert_eq!(
            levels.select(1).unwrap_err(),
            LevelErr::NoSuchLevel { index: 1, count: 1 }
        );
        assert_eq!(
            LevelList::parse("").select(0).unwrap_err(),
            LevelErr::NoSuchLevel { index: 0, count: 0 }
        );
    }

    #[test]
    fn selecting_again_restarts() {
        let levels = LevelList::parse("#####\n#@$.#\n#####\n");
        let mut arena = levels.select(0).unwrap();
        arena.move_player(Dir::East).unwrap();
        assert!(arena.is_won());

        let arena = levels.select(0).unwrap();
        assert!(!arena.is_won());
        assert_eq!(arena.moves(), 0);
    }

    #[test]
    fn round_trip() {
        let level = ORIGINAL_1.trim_start_matches('\n');
        let arena = LevelList::parse(level).select(0).unwrap();
        assert_eq!(arena.width(), 19);
        assert_eq!(arena.height(), 11);

        // short rows are padded with floor
        let serialized = arena.serialize();
        for (expected, actual) in level.lines().zip(serialized.lines()) {
            assert_eq!(expected, actual.trim_end());
            assert_eq!(actual.chars().count(), 19);
        }
        assert_eq!(serialized.lines().count(), 11);

        let reparsed = LevelList::parse(&serialized).select(0).unwrap();
        assert_eq!(reparsed, arena);
    }

    #[test]
    fn round_trip_all_symbols() {
        let level = "#######\n#?!$. #\n#######\n";
        let arena = LevelList::parse(level).select(0).unwrap();
        assert_eq!(arena.serialize(), level);
    }

    #[test]
    fn round_trip_after_moves() {
        let level = "#######\n#@$ . #\n# $. !#\n#######\n";
        let mut arena = LevelList::parse(level).select(0).unwrap();
        for &dir in &[Dir::East, Dir::East, Dir::South] {
            arena.move_player(dir).unwrap();
        }
        let serialized = arena.serialize();
        assert_eq!(serialized, "#######\n#   ! #\n# $? !#\n#######\n");

        let reparsed = LevelList::parse(&serialized).select(0).unwrap();
        assert_eq!(reparsed.serialize(), serialized);
        assert_eq!(reparsed.player_pos(), arena.player_pos());
        assert_eq!(reparsed.moves(), 0);
    }

    #[test]
    fn no_player() {
        let arena = LevelList::parse("#####\n# $.#\n#####\n").select(0).unwrap();
        assert_eq!(arena.player_pos(), Pos::new(0, 0));
    }

    #[test]
    fn iterating() {
        let levels: LevelList = "; a\n#@#\n; b\n#@ #\n".parse().unwrap();
        let widths: Vec<_> = levels.iter().map(LevelRecord::width).collect();
        assert_eq!(widths, vec![3, 4]);
        let titles: Vec<_> = (&levels).into_iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec![Some("a"), Some("b")]);
        assert!(!levels.is_empty());
    }
}
