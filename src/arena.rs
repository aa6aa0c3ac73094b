use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

use crate::config::Format;
use crate::data::{Dir, Ground, Occupant, Pos, Rect, Tile};
use crate::map_formatter::MapFormatter;
use crate::moves::Move;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaErr {
    OutOfBounds(Pos),
}

impl Display for ArenaErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ArenaErr::OutOfBounds(pos) => write!(f, "Position {} is outside the map", pos),
        }
    }
}

impl Error for ArenaErr {}

/// Live state of one level.
///
/// The grid only ever holds ground and crates, the player is tracked separately
/// and overlaid by `tile` and the formatters.
#[derive(Clone, PartialEq, Eq)]
pub struct Arena {
    grid: Vec2d<Tile>,
    player_pos: Pos,
    moves: u32,
    affected_area: Rect,
}

impl Arena {
    pub fn new(width: usize, height: usize) -> Self {
        Arena {
            grid: Vec2d::new(width, height, Tile::FLOOR),
            player_pos: Pos::new(0, 0),
            moves: 0,
            affected_area: Rect::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    /// Cells touched by the most recent move. Only a redraw hint.
    pub fn last_affected_area(&self) -> Rect {
        self.affected_area
    }

    /// Merges `tile` into what's already at `pos`, each layer separately,
    /// so a goal and a crate can be written in either order.
    ///
    /// A player is not stored, it only moves the tracked player position.
    pub fn set_tile(&mut self, pos: Pos, tile: Tile) -> Result<(), ArenaErr> {
        let cell = self.grid.get_mut(pos).ok_or(ArenaErr::OutOfBounds(pos))?;
        let tile = if tile.occupant == Occupant::Player {
            self.player_pos = pos;
            tile.with_occupant(Occupant::Empty)
        } else {
            tile
        };
        *cell = cell.merge(tile);
        Ok(())
    }

    /// What the map holds at `pos`, without the player. Floor outside the map.
    pub fn tile_on_map(&self, pos: Pos) -> Tile {
        self.grid.get(pos).cloned().unwrap_or(Tile::FLOOR)
    }

    /// What is visible at `pos`.
    pub fn tile(&self, pos: Pos) -> Tile {
        let tile = self.tile_on_map(pos);
        if pos == self.player_pos {
            tile.with_occupant(Occupant::Player)
        } else {
            tile
        }
    }

    /// Steps or pushes in `dir`. Returns `None` and leaves everything untouched
    /// if the way is blocked.
    pub fn move_player(&mut self, dir: Dir) -> Option<Move> {
        let from = self.player_pos;
        let to = from + dir;
        if !self.grid.contains(to) {
            trace!("{} blocked by map edge at {}", dir, to);
            return None;
        }

        let dest = self.grid[to];
        if dest.ground == Ground::Wall {
            trace!("{} blocked by wall at {}", dir, to);
            return None;
        }

        let is_push = dest.has_crate();
        if is_push {
            let beyond = to + dir;
            if !self.grid.get(beyond).map_or(false, |&t| t.is_free()) {
                trace!("{} blocked, crate at {} can't move to {}", dir, to, beyond);
                return None;
            }
            self.grid[to] = dest.with_occupant(Occupant::Empty);
            let beyond_tile = &mut self.grid[beyond];
            *beyond_tile = beyond_tile.with_occupant(Occupant::Crate);
        }

        self.affected_area = self.affected_rect(from, to + dir);
        self.player_pos = to;
        self.moves += 1;
        Some(Move::new(dir, is_push))
    }

    /// Bounding box of `from` and `lead`, clamped to the map.
    fn affected_rect(&self, from: Pos, lead: Pos) -> Rect {
        let max_x = self.width() as i32 - 1;
        let max_y = self.height() as i32 - 1;
        Rect {
            left: from.x.min(lead.x).max(0) as usize,
            top: from.y.min(lead.y).max(0) as usize,
            right: from.x.max(lead.x).min(max_x) as usize,
            bottom: from.y.max(lead.y).min(max_y) as usize,
        }
    }

    pub fn goal_cnt(&self) -> usize {
        self.grid.iter().filter(|t| t.ground == Ground::Goal).count()
    }

    pub fn placed_cnt(&self) -> usize {
        self.grid
            .iter()
            .filter(|&&t| t == Tile::PLACED_CRATE)
            .count()
    }

    /// Every goal has a crate on it. The player standing on a goal doesn't count.
    pub fn is_won(&self) -> bool {
        self.grid
            .iter()
            .all(|t| t.ground != Ground::Goal || t.has_crate())
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.grid, self.player_pos, format)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    /// Text that reads back as the same level, see `LevelList::parse`.
    pub fn serialize(&self) -> String {
        self.format(Format::Native).to_string()
    }
}

impl Display for Arena {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Native))
    }
}

impl Debug for Arena {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
