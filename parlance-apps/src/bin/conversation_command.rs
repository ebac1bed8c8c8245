use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use parlance_apps::{utils::init_tracing, ConversationConfig, Error};
use parlance_command::{ConversationCommand, ConversationCommandExecutor};
use tracing::info;

/// A parlance command line tool.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct ConversationCommandArgs {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<ConversationCommand>,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = ConversationCommandArgs::parse();
    info!("ParsedArgs {:?}", args);

    if args.show_default_config {
        print!("{}", toml::to_string(&ConversationConfig::default())?);
        return Ok(());
    }

    let config_path = parlance_apps::utils::get_apps_conversation_config(args.config_path);
    let command = args.command.ok_or(Error::NoCommand)?;
    let config = match &config_path {
        Some(config_path) => ConversationConfig::try_new(config_path)?,
        None => ConversationConfig::default(),
    };

    let conversation = config.create_conversation()?;
    let executor = ConversationCommandExecutor::default();
    Ok(executor.execute(&conversation, &command).await?)
}
