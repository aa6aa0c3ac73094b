//! Playing through a level pack: which level is loaded, what happens when it's solved.

use std::mem;

use fnv::FnvHashMap;
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::arena::Arena;
use crate::data::Dir;
use crate::level::{LevelErr, LevelList};
use crate::moves::{Move, Moves};
use crate::state::Snapshot;

/// Pack name used when none is given.
pub const DEFAULT_PACK: &str = "main";

/// Receives finished attempts. How and where they're kept is up to the implementation.
pub trait ScoreStore {
    /// Called once per solved attempt. `pack` tells apart levels with the same index
    /// in different files.
    fn record(&mut self, pack: &str, level: usize, moves: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn record(&mut self, pack: &str, level: usize, moves: u32) {
        (**self).record(pack, level, moves);
    }
}

/// Best (fewest moves) result per level, in memory only.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    best: FnvHashMap<(String, usize), u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, pack: &str, level: usize) -> Option<u32> {
        self.best.get(&(pack.to_string(), level)).cloned()
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn table(&self) -> Table {
        let mut levels: Vec<_> = self.best.iter().collect();
        levels.sort();

        let mut table = Table::new();
        table.set_titles(Row::new(vec![
            Cell::new("Pack"),
            Cell::new("Level"),
            Cell::new("Best"),
        ]));
        for ((pack, level), moves) in levels {
            table.add_row(Row::new(vec![
                Cell::new(pack),
                Cell::new(&level.to_string()),
                Cell::new(&moves.separated_string()),
            ]));
        }
        table
    }
}

impl ScoreStore for ScoreBoard {
    fn record(&mut self, pack: &str, level: usize, moves: u32) {
        let best = self.best.entry((pack.to_string(), level)).or_insert(moves);
        if moves < *best {
            *best = moves;
        }
    }
}

/// Result of one move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Blocked,
    Moved(Move),
    /// The session has already moved on to the next level.
    Solved { level: usize, solution: Moves },
    /// The last level was solved, the arena still shows it.
    Finished { level: usize, solution: Moves },
}

#[derive(Debug)]
pub struct Session<S> {
    levels: LevelList,
    pack: String,
    level: usize,
    arena: Arena,
    history: Moves,
    /// The last level was solved, nothing more to play until another is selected.
    finished: bool,
    scores: S,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(levels: LevelList, level: usize, scores: S) -> Result<Self, LevelErr> {
        let arena = levels.select(level)?;
        info!("Starting at level {} of {}", level, levels.len());
        Ok(Session {
            levels,
            pack: DEFAULT_PACK.to_string(),
            level,
            arena,
            history: Moves::default(),
            finished: false,
            scores,
        })
    }

    /// Continues a saved game. The board comes from the snapshot, the pack is
    /// needed to carry on after it's solved.
    pub fn restore(levels: LevelList, snapshot: &Snapshot, scores: S) -> Result<Self, LevelErr> {
        if snapshot.level >= levels.len() {
            return Err(LevelErr::NoSuchLevel {
                index: snapshot.level,
                count: levels.len(),
            });
        }
        let arena = snapshot.to_arena()?;
        info!("Restored level {}", snapshot.level);
        Ok(Session {
            levels,
            pack: DEFAULT_PACK.to_string(),
            level: snapshot.level,
            arena,
            history: Moves::default(),
            finished: false,
            scores,
        })
    }

    /// Name the scores are recorded under.
    pub fn with_pack<P: Into<String>>(mut self, pack: P) -> Self {
        self.pack = pack.into();
        self
    }

    pub fn pack(&self) -> &str {
        &self.pack
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn levels(&self) -> &LevelList {
        &self.levels
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Moves played on the current level since it was (re)started.
    pub fn history(&self) -> &Moves {
        &self.history
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn select(&mut self, level: usize) -> Result<(), LevelErr> {
        self.arena = self.levels.select(level)?;
        self.level = level;
        self.history.clear();
        self.finished = false;
        debug!("Selected level {}", level);
        Ok(())
    }

    pub fn retry(&mut self) -> Result<(), LevelErr> {
        self.select(self.level)
    }

    pub fn skip(&mut self) -> Result<(), LevelErr> {
        self.select(self.level + 1)
    }

    /// The win is checked after every request, blocked or not, so a level
    /// that starts out solved is reported on the first one.
    ///
    /// Once the last level is finished every request is `Blocked` until
    /// `select` or `retry`.
    pub fn move_player(&mut self, dir: Dir) -> Step {
        if self.finished {
            return Step::Blocked;
        }

        let mov = self.arena.move_player(dir);
        if let Some(mov) = mov {
            self.history.add(mov);
        }
        if !self.arena.is_won() {
            return mov.map_or(Step::Blocked, Step::Moved);
        }

        let level = self.level;
        info!("Solved level {} in {} moves", level, self.arena.moves());
        self.scores.record(&self.pack, level, self.arena.moves());

        let solution = mem::replace(&mut self.history, Moves::default());
        match self.select(level + 1) {
            Ok(()) => Step::Solved { level, solution },
            Err(_) => {
                self.history = solution.clone();
                self.finished = true;
                Step::Finished { level, solution }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.level, self.arena.serialize())
    }
}
