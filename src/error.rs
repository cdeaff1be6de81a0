#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid cell notation: {0:?}")]
    InvalidNotation(String),

    #[error("Cell ({row}, {col}) outside {rows}x{cols} board")]
    CellOutOfBounds { row: u8, col: u8, rows: u8, cols: u8 },

    #[error("Board has {cells} cells, visited set holds at most 64")]
    BoardTooLarge { cells: usize },

    #[error("Label grid size mismatch: expected {expected} labels, got {got}")]
    LabelGridSize { expected: usize, got: usize },

    #[error("Adjacency table size mismatch: expected {expected} rows, got {got}")]
    AdjacencySize { expected: usize, got: usize },

    #[error("Invalid label character: {0:?}")]
    InvalidLabel(char),

    #[error("Candidate weight set is empty")]
    EmptyCandidates,

    #[error("Candidate weights must be positive, got {0}")]
    NonPositiveWeight(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

