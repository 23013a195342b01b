use super::*;
use std::fmt::{Display, Error, Formatter};

impl Display for BddVariable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl BddVariable {
    /// Create a variable from a standard usize index.
    pub fn from_index(index: usize) -> BddVariable {
        BddVariable(index as u16)
    }

    /// Cast this variable to a standard usize index.
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}
