// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod arena;
pub mod config;
pub mod data;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod replay_formatter;
pub mod session;
pub mod state;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::level::LevelList;

pub trait LoadLevels {
    /// Failing to open the file is an error, failing halfway through isn't,
    /// see `LevelList::from_reader`.
    fn load_levels(&self) -> Result<LevelList, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadLevels for P {
    fn load_levels(&self) -> Result<LevelList, Box<dyn Error>> {
        let reader = fs::open_file(self)?;
        Ok(LevelList::from_reader(reader))
    }
}
