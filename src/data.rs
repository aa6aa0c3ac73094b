use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// The persistent terrain of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ground {
    Floor,
    Wall,
    Goal,
}

impl Ground {
    /// `Floor` is the identity, anything else replaces what was there.
    fn merge(self, incoming: Ground) -> Ground {
        match incoming {
            Ground::Floor => self,
            _ => incoming,
        }
    }
}

/// The transient thing sitting on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    Crate,
    Player,
}

impl Occupant {
    fn merge(self, incoming: Occupant) -> Occupant {
        match incoming {
            Occupant::Empty => self,
            _ => incoming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub ground: Ground,
    pub occupant: Occupant,
}

impl Tile {
    pub const FLOOR: Tile = Tile::new(Ground::Floor, Occupant::Empty);
    pub const WALL: Tile = Tile::new(Ground::Wall, Occupant::Empty);
    pub const GOAL: Tile = Tile::new(Ground::Goal, Occupant::Empty);
    pub const CRATE: Tile = Tile::new(Ground::Floor, Occupant::Crate);
    pub const PLAYER: Tile = Tile::new(Ground::Floor, Occupant::Player);
    pub const PLACED_CRATE: Tile = Tile::new(Ground::Goal, Occupant::Crate);
    pub const PLAYER_ON_GOAL: Tile = Tile::new(Ground::Goal, Occupant::Player);

    pub const fn new(ground: Ground, occupant: Occupant) -> Self {
        Tile { ground, occupant }
    }

    /// Combines both layers independently, see `Ground::merge` and `Occupant::merge`.
    pub fn merge(self, incoming: Tile) -> Tile {
        Tile {
            ground: self.ground.merge(incoming.ground),
            occupant: self.occupant.merge(incoming.occupant),
        }
    }

    pub fn with_occupant(self, occupant: Occupant) -> Tile {
        Tile { occupant, ..self }
    }

    pub fn has_crate(self) -> bool {
        self.occupant == Occupant::Crate
    }

    /// A crate can be pushed here.
    pub fn is_free(self) -> bool {
        self.ground != Ground::Wall && self.occupant == Occupant::Empty
    }

    pub fn from_char(c: char) -> Tile {
        match c {
            '#' => Tile::WALL,
            '.' => Tile::GOAL,
            '$' => Tile::CRATE,
            '@' => Tile::PLAYER,
            '!' => Tile::PLACED_CRATE,
            '?' => Tile::PLAYER_ON_GOAL,
            _ => Tile::FLOOR,
        }
    }

    pub fn to_char(self) -> char {
        match (self.ground, self.occupant) {
            (Ground::Wall, _) => '#',
            (Ground::Floor, Occupant::Empty) => ' ',
            (Ground::Floor, Occupant::Crate) => '$',
            (Ground::Floor, Occupant::Player) => '@',
            (Ground::Goal, Occupant::Empty) => '.',
            (Ground::Goal, Occupant::Crate) => '!',
            (Ground::Goal, Occupant::Player) => '?',
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::FLOOR
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// `x` is the column, `y` the row. Signed so a step off the grid is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

impl Dir {
    /// Unit step as `(dx, dy)`, north is towards row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::North => (0, -1),
            Dir::East => (1, 0),
            Dir::South => (0, 1),
            Dir::West => (-1, 0),
        }
    }

    /// Accepts lurd notation in either case.
    pub fn from_char(c: char) -> Option<Dir> {
        match c.to_ascii_lowercase() {
            'u' => Some(Dir::North),
            'r' => Some(Dir::East),
            'd' => Some(Dir::South),
            'l' => Some(Dir::West),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "u"),
            Dir::East => write!(f, "r"),
            Dir::South => write!(f, "d"),
            Dir::West => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.delta();
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Inclusive cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Rect {
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) >= self.left
            && (pos.x as usize) <= self.right
            && (pos.y as usize) >= self.top
            && (pos.y as usize) <= self.bottom
    }
}
