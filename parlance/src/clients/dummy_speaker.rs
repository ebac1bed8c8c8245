use std::sync::Mutex;

use crate::{error::Error, traits::Speaker, WaitFuture};

/// Dummy Speaker for debug or tests.
///
/// Unlike real speakers, it records every message passed to
/// [`speak`](Speaker::speak), in order.
#[derive(Debug, Default)]
pub struct DummySpeaker {
    messages: Mutex<Vec<String>>,
}

impl DummySpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent message, or an empty string if nothing has
    /// been spoken yet.
    pub fn last_message(&self) -> String {
        self.messages
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Returns every message spoken so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Speaker for DummySpeaker {
    fn speak(&self, message: &str) -> Result<WaitFuture<'static>, Error> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(WaitFuture::ready())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set() {
        let speaker = DummySpeaker::new();

        assert_eq!(speaker.last_message(), "");
        speaker.speak("abc").unwrap().await.unwrap();
        assert_eq!(speaker.last_message(), "abc");
    }

    #[test]
    fn test_set_no_wait() {
        let speaker = DummySpeaker::new();

        assert_eq!(speaker.last_message(), "");
        let _ = speaker.speak("abc").unwrap();
        let _ = speaker.speak("def").unwrap();
        assert_eq!(speaker.messages(), vec!["abc", "def"]);
    }
}
