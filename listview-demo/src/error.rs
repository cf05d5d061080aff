use std::io;

use listview::ListError;
use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    List(#[from] ListError),
}
