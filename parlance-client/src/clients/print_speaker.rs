use parlance::{Error, Speaker, WaitFuture};

/// A [`Speaker`] that writes each line to standard output.
///
/// This is the default sink of a conversation.
#[derive(Debug, Default)]
pub struct PrintSpeaker {}

impl PrintSpeaker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Speaker for PrintSpeaker {
    fn speak(&self, message: &str) -> Result<WaitFuture<'static>, Error> {
        println!("{message}");
        Ok(WaitFuture::ready())
    }
}
