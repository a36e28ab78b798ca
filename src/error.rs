use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{routine} did not converge after {iterations} iterations")]
    NotConverged {
        routine: &'static str,
        iterations: usize,
    },
    #[error("The position is not covered by the grid")]
    OutOfGrid,
    #[error("Invalid grid reference: {0}")]
    InvalidGridRef(String),
}
