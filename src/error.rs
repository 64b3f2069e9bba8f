use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(thiserror::Error, Debug)]
pub enum DiscoveryError {
    #[error("{0} operating system is not supported")]
    UnsupportedPlatform(String),

    #[error("unable to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("unable to run {program}: {source}")]
    Launch { program: String, source: io::Error },

    #[error("lookup output is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
