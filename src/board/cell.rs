use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// A board coordinate. Row 0 is rank `1`, column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self { Self { row, col } }

    pub fn row(self) -> u8 { self.row }
    pub fn col(self) -> u8 { self.col }

    /// Bit index on a board `cols` wide (`row*cols+col`).
    #[inline]
    pub fn index(self, cols: u8) -> usize { self.row as usize * cols as usize + self.col as usize }

    pub fn from_index(index: usize, cols: u8) -> Self {
        let cols = cols as usize;
        Self { row: (index / cols) as u8, col: (index % cols) as u8 }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row as u32 + 1)
    }
}

impl FromStr for Cell {
    type Err = Error;

    /// Parses board notation such as `a1` or `f6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(|| Error::InvalidNotation(s.to_string()))?;
        if !file.is_ascii_lowercase() { return Err(Error::InvalidNotation(s.to_string())); }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidNotation(s.to_string()));
        }
        let rank: u32 = digits.parse().map_err(|_| Error::InvalidNotation(s.to_string()))?;
        if rank == 0 || rank > u8::MAX as u32 { return Err(Error::InvalidNotation(s.to_string())); }
        Ok(Self { row: (rank - 1) as u8, col: file as u8 - b'a' })
    }
}

/// Category letter carried by each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    pub fn from_char(c: char) -> Result<Self, Error> {
        match c {
            'a' => Ok(Label::A),
            'b' => Ok(Label::B),
            'c' => Ok(Label::C),
            _ => Err(Error::InvalidLabel(c)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Label::A => 'a',
            Label::B => 'b',
            Label::C => 'c',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_char()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_corners() {
        assert_eq!("a1".parse::<Cell>().unwrap(), Cell::new(0, 0));
        assert_eq!("f6".parse::<Cell>().unwrap(), Cell::new(5, 5));
        assert_eq!("a6".parse::<Cell>().unwrap(), Cell::new(5, 0));
        assert_eq!("f1".parse::<Cell>().unwrap(), Cell::new(0, 5));
        assert_eq!(Cell::new(1, 2).to_string(), "c2");
    }

    #[test]
    fn notation_rejects_garbage() {
        for bad in ["", "1a", "a0", "A1", "a", "zz", "a+1", "a-1", "a 1"] {
            assert!(bad.parse::<Cell>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn labels_are_lowercase_only() {
        assert_eq!(Label::from_char('b').unwrap(), Label::B);
        for bad in ['A', 'B', 'C', 'd'] {
            assert!(matches!(Label::from_char(bad), Err(Error::InvalidLabel(c)) if c == bad));
        }
    }

    #[test]
    fn index_round_trips_on_six_wide_board() {
        let c = Cell::new(4, 3);
        assert_eq!(c.index(6), 27);
        assert_eq!(Cell::from_index(27, 6), c);
    }
}
