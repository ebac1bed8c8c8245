use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("parlance-client: Failed to open transcript {:?} ({}).", .0, .1)]
    TranscriptOpenFailure(PathBuf, #[source] std::io::Error),
    #[error("parlance-client: No ParentDirectory {:?} is found.", .0)]
    NoParentDirectory(PathBuf),
    #[error("parlance-client: parlance: {:?}", .0)]
    Parlance(#[from] parlance::Error),
}
