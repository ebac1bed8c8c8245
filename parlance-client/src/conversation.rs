use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use parlance::{Speaker, WaitFuture};
use tracing::debug;

use crate::Error;

/// Name used to attribute lines spoken before any `register` call.
const UNSET_SPEAKER: &str = "None";

pub type ArcConversation = Conversation<Arc<dyn Speaker>>;
pub type BoxConversation = Conversation<Box<dyn Speaker>>;

/// A conversation: the current speaker slot plus the sink attributed lines
/// are emitted to.
///
/// At most one speaker is current at any time. [`register`](Self::register)
/// replaces the slot unconditionally and no history is retained.
pub struct Conversation<S>
where
    S: Speaker,
{
    current_speaker: Mutex<Option<String>>,
    sink: S,
}

impl<S> Conversation<S>
where
    S: Speaker,
{
    /// Creates a new conversation emitting to `sink`, with no speaker
    /// registered yet.
    pub fn new(sink: S) -> Self {
        Self {
            current_speaker: Mutex::new(None),
            sink,
        }
    }

    /// Creates a new conversation with `name` already registered.
    pub fn with_speaker(sink: S, name: impl Into<String>) -> Self {
        let conversation = Self::new(sink);
        conversation.register(name);
        conversation
    }

    /// Makes `name` the current speaker, replacing the previous one.
    pub fn register(&self, name: impl Into<String>) {
        let name = name.into();
        debug!("register {name:?}");
        *self.current_speaker.lock().unwrap() = Some(name);
    }

    /// Returns the current speaker, or `None` if nobody has registered yet.
    pub fn current_speaker(&self) -> Option<String> {
        self.current_speaker.lock().unwrap().clone()
    }

    /// Emits `[<current speaker>] <text>` to the sink and returns a future
    /// that waits until the emission is complete.
    ///
    /// Lines spoken before any [`register`](Self::register) call are
    /// attributed to `None`.
    pub fn speak(&self, text: &str) -> Result<WaitFuture<'_>, Error> {
        Ok(self.sink.speak(&self.attribute(text))?)
    }

    fn attribute(&self, text: &str) -> String {
        match &*self.current_speaker.lock().unwrap() {
            Some(name) => format!("[{name}] {text}"),
            None => format!("[{UNSET_SPEAKER}] {text}"),
        }
    }
}

impl<S> fmt::Debug for Conversation<S>
where
    S: Speaker,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversation")
            .field("current_speaker", &self.current_speaker)
            .finish_non_exhaustive()
    }
}

/// Convert a path relative to `base_path`'s parent directory into an
/// absolute one.
pub fn resolve_relative_path<B: AsRef<Path>, P: AsRef<Path>>(
    base_path: B,
    path: P,
) -> Result<PathBuf, Error> {
    Ok(base_path
        .as_ref()
        .parent()
        .ok_or_else(|| Error::NoParentDirectory(base_path.as_ref().to_owned()))?
        .join(path))
}

#[cfg(test)]
mod tests {
    use parlance::DummySpeaker;

    use super::*;

    fn new_conversation() -> (Arc<DummySpeaker>, ArcConversation) {
        let speaker = Arc::new(DummySpeaker::new());
        let conversation = Conversation::new(speaker.clone() as Arc<dyn Speaker>);
        (speaker, conversation)
    }

    #[tokio::test]
    async fn speak_attributes_to_registered_speaker() {
        let (speaker, conversation) = new_conversation();

        conversation.register("John");
        conversation.speak("Hi").unwrap().await.unwrap();
        assert_eq!(speaker.last_message(), "[John] Hi");

        conversation.register("Carlos");
        conversation.speak("Foobar!").unwrap().await.unwrap();
        assert_eq!(speaker.last_message(), "[Carlos] Foobar!");
    }

    #[test]
    fn speak_before_register_uses_unset_sentinel() {
        let (speaker, conversation) = new_conversation();

        assert_eq!(conversation.current_speaker(), None);
        let _ = conversation.speak("Hello world!").unwrap();
        assert_eq!(speaker.last_message(), "[None] Hello world!");
    }

    #[test]
    fn register_replaces_previous_speaker() {
        let (speaker, conversation) = new_conversation();

        conversation.register("A");
        conversation.register("B");
        assert_eq!(conversation.current_speaker(), Some("B".to_owned()));
        let _ = conversation.speak("only B").unwrap();
        assert_eq!(speaker.messages(), vec!["[B] only B"]);
    }

    #[tokio::test]
    async fn scripted_conversation() {
        let (speaker, conversation) = new_conversation();

        conversation.register("John");
        conversation.speak("Hello world!").unwrap().await.unwrap();
        conversation.register("Carlos");
        conversation.speak("Foobar!").unwrap().await.unwrap();
        assert_eq!(
            speaker.messages(),
            vec!["[John] Hello world!", "[Carlos] Foobar!"]
        );
    }

    #[test]
    fn with_speaker_starts_registered() {
        let speaker = Arc::new(DummySpeaker::new());
        let conversation =
            Conversation::with_speaker(speaker.clone() as Arc<dyn Speaker>, "John");
        assert_eq!(conversation.current_speaker(), Some("John".to_owned()));
    }

    #[test]
    fn test_resolve_relative_path() {
        let path = resolve_relative_path("/config/some_file.toml", "dir1/transcript.txt").unwrap();
        assert_eq!(path, PathBuf::from("/config/dir1/transcript.txt"));
        let path = resolve_relative_path("/config/some_file.toml", "../dir2/transcript.txt")
            .unwrap();
        assert_eq!(path, PathBuf::from("/config/../dir2/transcript.txt"));
    }
}
