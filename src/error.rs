use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyPathError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Character Not Found: '{0}' is not on the keyboard")]
    CharacterNotFound(char),

    /// The BFS queue drained without reaching the target. A keyboard built by
    /// `Keyboard::build` is always connected, so this signals a broken layout.
    #[error("Internal Error: '{to}' is unreachable from '{from}'")]
    Unreachable { from: char, to: char },

    #[error("Task #{index} failed: {source}")]
    Task {
        index: usize,
        #[source]
        source: Box<KeyPathError>,
    },
}

pub type KpResult<T> = Result<T, KeyPathError>;
