use radix_core::ConversionError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
