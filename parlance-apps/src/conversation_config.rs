use std::path::{Path, PathBuf};

use parlance::Speaker;
use parlance_client::{
    resolve_relative_path, BoxConversation, Conversation, PrintSpeaker, TranscriptSpeaker,
};
use parlance_speak_cmd::LocalCommand;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", content = "args")]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub enum SpeakConfig {
    Print,
    Command {
        #[serde(default)]
        #[serde(skip_serializing_if = "Option::is_none")]
        program: Option<String>,
    },
    Transcript {
        path: PathBuf,
    },
}

impl Default for SpeakConfig {
    fn default() -> Self {
        SpeakConfig::Print
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ConversationConfig {
    // TOML format has a restriction that if a table itself contains tables,
    // all keys with non-table values must be emitted first.
    // Therefore, these fields must be located at the start of the struct.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_speaker: Option<String>,

    #[serde(default)]
    pub speak_config: SpeakConfig,
}

impl ConversationConfig {
    fn create_print_speaker(&self) -> Box<dyn Speaker> {
        Box::new(PrintSpeaker::new())
    }

    fn create_local_command_speaker(&self, program: Option<&str>) -> Box<dyn Speaker> {
        match program {
            Some(program) => Box::new(LocalCommand::with_program(program)),
            None => Box::new(LocalCommand::new()),
        }
    }

    fn create_transcript_speaker(&self, path: &Path) -> Result<Box<dyn Speaker>, Error> {
        Ok(Box::new(TranscriptSpeaker::try_new(path)?))
    }

    pub fn create_speaker(&self) -> Result<Box<dyn Speaker>, Error> {
        Ok(match &self.speak_config {
            SpeakConfig::Print => self.create_print_speaker(),
            SpeakConfig::Command { program } => {
                self.create_local_command_speaker(program.as_deref())
            }
            SpeakConfig::Transcript { path } => self.create_transcript_speaker(path)?,
        })
    }

    pub fn create_conversation(&self) -> Result<BoxConversation, Error> {
        let speaker = self.create_speaker()?;
        Ok(match &self.initial_speaker {
            Some(name) => Conversation::with_speaker(speaker, name.clone()),
            None => Conversation::new(speaker),
        })
    }
}

impl ConversationConfig {
    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            &path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let mut config: ConversationConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))?;

        if let SpeakConfig::Transcript {
            path: transcript_path,
        } = &mut config.speak_config
        {
            let full_path = resolve_relative_path(path.as_ref(), transcript_path.to_owned())?;
            *transcript_path = full_path;
        }
        debug!("{:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_transcript_path() {
        let config = ConversationConfig::from_str(
            r#"
            [speak_config]
            type = "Transcript"

            [speak_config.args]
            path = "dir1/transcript.txt"
            "#,
            "/config/some_file.toml",
        )
        .unwrap();
        assert!(matches!(
            config.speak_config,
            SpeakConfig::Transcript { ref path } if path == Path::new("/config/dir1/transcript.txt")
        ));
    }

    #[test]
    fn test_default_is_print() {
        let config = ConversationConfig::from_str("", "empty.toml").unwrap();
        assert!(matches!(config.speak_config, SpeakConfig::Print));
        assert_eq!(config.initial_speaker, None);
    }
}
