use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("parlance-command: Failed to open {:?} {:?}.", .0, .1)]
    CommandFileOpenFailure(PathBuf, String),
    #[error("parlance-command: Failed to parse command {:?} ({}).", .0, .1)]
    CommandParseFailure(String, #[source] clap::Error),
    #[error("parlance-command: parlance: {:?}", .0)]
    Parlance(#[from] parlance::Error),
    #[error("parlance-command: parlance-client: {:?}", .0)]
    ParlanceClient(#[from] parlance_client::Error),
}
