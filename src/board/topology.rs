use crate::board::cell::{Cell, Label};
use crate::error::{Error, Result};

/// Side length of the reference board.
pub const SIZE: u8 = 6;

/// Knight offsets as (Δrow, Δcol); neighbor order follows this table.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Reference label grid, row 0 (rank 1) first.
pub const REFERENCE_GRID: [&str; 6] = [
    "aaabbc",
    "aaabbc",
    "aabbcc",
    "aabbcc",
    "abbccc",
    "abbccc",
];

/// Cell labels plus the precomputed adjacency table. Immutable after construction
/// and shared by reference across enumeration workers.
#[derive(Clone, Debug)]
pub struct Board {
    rows: u8,
    cols: u8,
    labels: Vec<Label>,
    adjacency: Vec<Vec<Cell>>,
}

impl Board {
    /// The 6x6 reference board with knight-move adjacency.
    pub fn knight() -> Self {
        let mut labels = Vec::with_capacity(SIZE as usize * SIZE as usize);
        for row in REFERENCE_GRID {
            for b in row.bytes() {
                labels.push(match b { b'a' => Label::A, b'b' => Label::B, _ => Label::C });
            }
        }
        Self { rows: SIZE, cols: SIZE, adjacency: knight_adjacency(SIZE, SIZE), labels }
    }

    /// Knight-move board of arbitrary size (at most 64 cells) with the given labels.
    pub fn knight_with_labels(rows: u8, cols: u8, labels: Vec<Label>) -> Result<Self> {
        check_dims(rows, cols, labels.len())?;
        Ok(Self { rows, cols, adjacency: knight_adjacency(rows, cols), labels })
    }

    /// Board with a hand-picked adjacency table. `adjacency[i]` lists the
    /// neighbors of the cell with index `i`; cells may have no neighbors.
    pub fn from_parts(rows: u8, cols: u8, labels: Vec<Label>, adjacency: Vec<Vec<Cell>>) -> Result<Self> {
        check_dims(rows, cols, labels.len())?;
        let cells = rows as usize * cols as usize;
        if adjacency.len() != cells {
            return Err(Error::AdjacencySize { expected: cells, got: adjacency.len() });
        }
        let board = Self { rows, cols, labels, adjacency };
        for list in &board.adjacency {
            for &n in list { board.check(n)?; }
        }
        Ok(board)
    }

    /// Parses one string of `a`/`b`/`c` per row, row 0 first.
    pub fn parse_labels(rows: &[&str]) -> Result<Vec<Label>> {
        rows.iter().flat_map(|r| r.chars()).map(Label::from_char).collect()
    }

    pub fn rows(&self) -> u8 { self.rows }
    pub fn cols(&self) -> u8 { self.cols }

    pub fn contains(&self, cell: Cell) -> bool { cell.row() < self.rows && cell.col() < self.cols }

    pub fn check(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) { Ok(()) } else {
            Err(Error::CellOutOfBounds { row: cell.row(), col: cell.col(), rows: self.rows, cols: self.cols })
        }
    }

    #[inline]
    pub fn index(&self, cell: Cell) -> usize { cell.index(self.cols) }

    #[inline]
    pub fn label(&self, cell: Cell) -> Label { self.labels[self.index(cell)] }

    #[inline]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] { &self.adjacency[self.index(cell)] }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.labels.len()).map(move |i| Cell::from_index(i, self.cols))
    }
}

impl Default for Board {
    fn default() -> Self { Self::knight() }
}

fn check_dims(rows: u8, cols: u8, labels: usize) -> Result<()> {
    let cells = rows as usize * cols as usize;
    if cells > 64 { return Err(Error::BoardTooLarge { cells }); }
    if labels != cells { return Err(Error::LabelGridSize { expected: cells, got: labels }); }
    Ok(())
}

fn knight_adjacency(rows: u8, cols: u8) -> Vec<Vec<Cell>> {
    let mut table = Vec::with_capacity(rows as usize * cols as usize);
    for r in 0..rows as i16 {
        for c in 0..cols as i16 {
            let mut list = Vec::with_capacity(KNIGHT_OFFSETS.len());
            for &(dr, dc) in &KNIGHT_OFFSETS {
                let (nr, nc) = (r + dr as i16, c + dc as i16);
                if nr >= 0 && nr < rows as i16 && nc >= 0 && nc < cols as i16 {
                    list.push(Cell::new(nr as u8, nc as u8));
                }
            }
            table.push(list);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_moves_in_offset_order() {
        let b = Board::knight();
        assert_eq!(b.neighbors(Cell::new(0, 0)), &[Cell::new(2, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn reference_labels() {
        let b = Board::knight();
        assert_eq!(b.label("a1".parse().unwrap()), Label::A);
        assert_eq!(b.label("f6".parse().unwrap()), Label::C);
        assert_eq!(b.label("d1".parse().unwrap()), Label::B);
        assert_eq!(b.label("b6".parse().unwrap()), Label::B);
    }

    #[test]
    fn from_parts_rejects_bad_neighbor() {
        let labels = Board::parse_labels(&["ab", "ca"]).unwrap();
        let adj = vec![vec![Cell::new(2, 0)], vec![], vec![], vec![]];
        assert!(matches!(Board::from_parts(2, 2, labels, adj), Err(Error::CellOutOfBounds { .. })));
    }

    #[test]
    fn oversized_board_rejected() {
        let labels = vec![Label::A; 81];
        assert!(matches!(Board::knight_with_labels(9, 9, labels), Err(Error::BoardTooLarge { cells: 81 })));
    }
}
