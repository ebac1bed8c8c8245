use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("parlance: Canceled : {}", message)]
    Canceled { message: String },
    #[error("parlance: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
