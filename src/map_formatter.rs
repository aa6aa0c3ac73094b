use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Ground, Occupant, Pos, Tile};
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<Tile>,
    player_pos: Pos,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<Tile>, player_pos: Pos, format: Format) -> Self {
        Self {
            grid,
            player_pos,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // trailing floor is kept so the text reparses to the same size
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let pos = Pos::new(c as i32, r as i32);
                let mut tile = self.grid[pos];
                if pos == self.player_pos {
                    tile = tile.with_occupant(Occupant::Player);
                }

                match self.format {
                    Format::Native => write!(f, "{}", tile)?,
                    Format::Xsb => Self::write_cell_xsb(tile, f)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_xsb(tile: Tile, f: &mut Formatter<'_>) -> fmt::Result {
        match (tile.ground, tile.occupant) {
            (Ground::Floor, Occupant::Empty) => write!(f, " "),
            (Ground::Floor, Occupant::Crate) => write!(f, "$"),
            (Ground::Floor, Occupant::Player) => write!(f, "@"),
            (Ground::Wall, _) => write!(f, "#"),
            (Ground::Goal, Occupant::Empty) => write!(f, "."),
            (Ground::Goal, Occupant::Crate) => write!(f, "*"),
            (Ground::Goal, Occupant::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
