use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// The checked-accessor error: the requested offset is not below the content length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected offset.
    pub index: usize,
    /// The content length it was checked against.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for text with {} bytes!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The positional-formatting error: the template named an argument position that was not
/// supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Positional argument {index} out of range for {count} supplied arguments!")]
pub struct MissingArgument {
    /// The placeholder's argument position.
    pub index: usize,
    /// How many arguments were supplied.
    pub count: usize,
}
