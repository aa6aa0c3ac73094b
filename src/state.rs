use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::arena::Arena;
use crate::fs;
use crate::level::{LevelErr, LevelList};

const HEADER: &str = "; level ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotErr {
    MissingHeader,
    BadLevel(String),
}

impl Display for SnapshotErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SnapshotErr::MissingHeader => {
                write!(f, "Not a saved game - missing '{}' line", HEADER.trim())
            }
            SnapshotErr::BadLevel(ref level) => {
                write!(f, "Invalid level number in saved game: {}", level)
            }
        }
    }
}

impl Error for SnapshotErr {}

/// A game in progress: the board as text and which level of the pack it is.
///
/// Written out it's an ordinary one-level document, the level number lives in the
/// comment line, so it can also be loaded as a level file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub level: usize,
    pub board: String,
}

impl Snapshot {
    pub fn new(level: usize, board: String) -> Self {
        Snapshot { level, board }
    }

    /// Move count and affected area start from scratch.
    pub fn to_arena(&self) -> Result<Arena, LevelErr> {
        LevelList::parse(&self.board).select(0)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        fs::write_file(path, &self.to_string())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let snapshot: Snapshot = fs::read_file(path)?.parse()?;
        Ok(snapshot)
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\n{}", HEADER, self.level, self.board)
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, '\n');
        let header = parts.next().unwrap_or("").trim_end();
        if !header.starts_with(HEADER) {
            return Err(SnapshotErr::MissingHeader);
        }
        let level = header[HEADER.len()..].trim();
        let level = level
            .parse::<usize>()
            .map_err(|_| SnapshotErr::BadLevel(level.to_string()))?;
        let board = parts.next().unwrap_or("").to_string();
        Ok(Snapshot { level, board })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;

    #[test]
    fn snapshot_text() {
        let snapshot = Snapshot::new(3, "#####\n# @!#\n#####\n".to_string());
        let text = snapshot.to_string();
        assert_eq!(text, "; level 3\n#####\n# @!#\n#####\n");
        assert_eq!(text.parse::<Snapshot>().unwrap(), snapshot);

        // also a valid level document
        let levels = LevelList::parse(&text);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels.get(0).unwrap().title(), Some("level 3"));
    }

    #[test]
    fn restoring_board() {
        let mut arena = LevelList::parse("######\n#@$ .#\n######\n").select(0).unwrap();
        arena.move_player(Dir::East).unwrap();

        let snapshot = Snapshot::new(0, arena.serialize());
        let restored = snapshot.to_arena().unwrap();
        assert_eq!(restored.serialize(), arena.serialize());
        assert_eq!(restored.player_pos(), arena.player_pos());
        assert_eq!(restored.moves(), 0);
    }

    #[test]
    fn bad_snapshots() {
        assert_eq!("#####\n".parse::<Snapshot>().unwrap_err(), SnapshotErr::MissingHeader);
        assert_eq!("".parse::<Snapshot>().unwrap_err(), SnapshotErr::MissingHeader);
        assert_eq!(
            "; level x\n###\n".parse::<Snapshot>().unwrap_err(),
            SnapshotErr::BadLevel("x".to_string())
        );
    }

    #[test]
    fn saving_and_loading() {
        let name = format!("sokoban-arena-snapshot-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        let snapshot = Snapshot::new(1, "###\n#?#\n###\n".to_string());
        snapshot.save(&path).unwrap();
        let loaded = Snapshot::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }
}
