use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Document not found: {document}")]
    DocumentNotFound {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document list not found: {}", path.display())]
    DocumentListNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Noise word list not found: {}", path.display())]
    NoiseWordsNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
