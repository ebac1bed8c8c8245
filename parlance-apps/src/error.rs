use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("parlance-apps: No Command is specified.")]
    NoCommand,
    #[error("parlance-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("parlance-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("parlance-apps: parlance-client: {:?}", .0)]
    ParlanceClient(#[from] parlance_client::Error),
    #[error("parlance-apps: parlance-command: {:?}", .0)]
    ParlanceCommand(#[from] parlance_command::Error),
}
