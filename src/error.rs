use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamerError {
    #[error("❗ Error: Please provide input text using -t")]
    MissingInput,

    // Only reachable through user supplied -ext / -sep values; the sanitizer never emits these.
    #[error("🚫 Invalid filename characters detected!")]
    InvalidFilename { filename: String },

    #[error("{0}")]
    Usage(String),

    #[error("interactive input unavailable: {0}")]
    InteractiveInput(#[from] dialoguer::Error),

    #[error("interactive input unavailable: {0}")]
    Io(#[from] std::io::Error),
}

impl NamerError {
    pub fn exit_code(&self) -> u8 {
        match self {
            NamerError::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, NamerError>;
