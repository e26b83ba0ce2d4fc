use thiserror::Error;

pub type Result<T> = std::result::Result<T, RibError>;

#[derive(Error, Debug)]
pub enum RibError {
    /// A table or coordinate file could not be parsed
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// An airfoil name is not present in the loaded catalog
    #[error("Airfoil not found: {0}")]
    Lookup(String),

    /// Input geometry cannot be processed without producing garbage coordinates
    #[error("Degenerate geometry: {0}")]
    GeometryDegenerate(String),

    /// A primitive was sent to a drawing sink which has already been saved
    #[error("Drawing sink already saved: {0}")]
    SinkClosed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RibError {
    pub fn format(line: usize, msg: impl Into<String>) -> Self {
        RibError::Format {
            line,
            message: msg.into(),
        }
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        RibError::GeometryDegenerate(msg.into())
    }

    pub fn lookup(name: impl Into<String>) -> Self {
        RibError::Lookup(name.into())
    }
}
