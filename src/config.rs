use std::fmt::{self, Display, Formatter};

/// Notation used when printing boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// The notation levels are read in: `!` crate on goal, `?` player on goal.
    Native,
    /// The common XSB notation: `*` crate on goal, `+` player on goal.
    Xsb,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Native => write!(f, "native"),
            Format::Xsb => write!(f, "xsb"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print the levels in the file.
    List,
    /// Play the given moves and print the result.
    Replay,
    /// Read moves and commands from stdin.
    Interactive,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Mode::List => write!(f, "list"),
            Mode::Replay => write!(f, "replay"),
            Mode::Interactive => write!(f, "interactive"),
        }
    }
}
