// Knight-path letter sequences on a labelled 6x6 board and weight-triple search
pub mod board;
pub mod config;
pub mod error;
pub mod report;
pub mod search;

pub use error::{Error, Result};
