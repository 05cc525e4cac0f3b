use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("error parsing content document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("post title must not be empty")]
    EmptyTitle,

    #[error("heading level {level} is outside the range 1 to 6")]
    InvalidHeadingLevel { level: u8 },

    #[error("table row {row} has {cells} cells, but the header has {columns} columns")]
    RowLengthMismatch {
        row: usize,
        cells: usize,
        columns: usize,
    },
}
