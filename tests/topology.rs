use knightmoves::board::{Board, Cell};

#[test]
fn neighbors_stay_on_board() {
    let b = Board::knight();
    for cell in b.cells() {
        for &n in b.neighbors(cell) {
            assert!(b.contains(n), "{cell} -> {n} leaves the board");
            let dr = (n.row() as i32 - cell.row() as i32).abs();
            let dc = (n.col() as i32 - cell.col() as i32).abs();
            assert!((dr, dc) == (1, 2) || (dr, dc) == (2, 1), "{cell} -> {n} is not a knight move");
        }
    }
}

#[test]
fn adjacency_is_symmetric() {
    let b = Board::knight();
    for cell in b.cells() {
        for &n in b.neighbors(cell) {
            assert!(b.neighbors(n).contains(&cell), "{n} does not lead back to {cell}");
        }
    }
}

#[test]
fn move_counts_match_six_by_six_knight_graph() {
    let b = Board::knight();
    let total: usize = b.cells().map(|c| b.neighbors(c).len()).sum();
    // 4*(n-1)*(n-2) undirected edges on an n x n board
    assert_eq!(total, 2 * 4 * 5 * 4);
    assert_eq!(b.cells().count(), 36);
    assert_eq!(b.neighbors(Cell::new(2, 2)).len(), 8);
    assert_eq!(b.neighbors(Cell::new(0, 1)).len(), 3);
}

#[test]
fn no_duplicate_neighbors() {
    let b = Board::knight();
    for cell in b.cells() {
        let mut ns: Vec<Cell> = b.neighbors(cell).to_vec();
        ns.sort();
        ns.dedup();
        assert_eq!(ns.len(), b.neighbors(cell).len(), "duplicate neighbor at {cell}");
    }
}
