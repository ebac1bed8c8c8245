use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use async_recursion::async_recursion;
use clap::Parser;
use parlance_client::BoxConversation;
use tracing::info;

use crate::Error as ConversationCommandError;

#[derive(Parser, Debug)]
#[command(rename_all = "snake_case")]
pub enum ConversationCommand {
    /// Register the current speaker. Subsequent lines are attributed to it.
    Register { name: String },
    /// Speak a text message as the current speaker.
    Speak { message: Vec<String> },
    /// Print the current speaker.
    Current,
    /// Load commands from file and execute them.
    LoadCommands { command_file_path: PathBuf },
}

#[derive(Debug, Default)]
pub struct ConversationCommandExecutor {}

impl ConversationCommandExecutor {
    #[async_recursion]
    pub async fn execute(
        &self,
        conversation: &BoxConversation,
        command: &ConversationCommand,
    ) -> Result<(), ConversationCommandError> {
        match &command {
            ConversationCommand::Register { name } => {
                conversation.register(name.clone());
            }
            ConversationCommand::Speak { message } => {
                // TODO: Parse quotations and comments
                // Currently '"Foo bar" # hoge' is parsed as message in below command.
                // 'parlance_apps_conversation_command speak "Foo bar" # hoge'
                conversation.speak(&message.join(" "))?.await?;
            }
            ConversationCommand::Current => match conversation.current_speaker() {
                Some(name) => println!("Current speaker : {name}"),
                None => println!("Current speaker : None"),
            },
            ConversationCommand::LoadCommands { command_file_path } => {
                for command in load_command_file_and_filter(command_file_path.clone())? {
                    let command_parsed_iter = command.split_whitespace();
                    // Parse the command
                    let read_opt = ConversationCommand::try_parse_from(
                        std::iter::once("").chain(command_parsed_iter),
                    )
                    .map_err(|e| {
                        ConversationCommandError::CommandParseFailure(command.clone(), e)
                    })?;
                    // Execute the parsed command
                    info!("Executing {}", command);
                    self.execute(conversation, &read_opt).await?;
                }
            }
        }
        Ok(())
    }
}

pub fn load_command_file_and_filter(
    file_path: PathBuf,
) -> Result<Vec<String>, ConversationCommandError> {
    let file = File::open(&file_path).map_err(|e| {
        ConversationCommandError::CommandFileOpenFailure(file_path.clone(), e.to_string())
    })?;
    let buf = BufReader::new(file);
    let mut commands = vec![];
    for line in buf.lines() {
        let command = line.map_err(|e| {
            ConversationCommandError::CommandFileOpenFailure(file_path.clone(), e.to_string())
        })?;
        // Ignore empty lines and comment lines
        let mut command_parsed_iter = command.split_whitespace();
        if command_parsed_iter.next().is_some_and(|w| !w.contains('#')) {
            commands.push(command);
        }
    }
    Ok(commands)
}
