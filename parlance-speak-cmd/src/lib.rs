#![doc = include_str!("../README.md")]
#![warn(missing_docs, rust_2018_idioms)]

use std::{io, process::Command};

use parlance::{Speaker, WaitFuture};

/// A [`Speaker`] implementation using a local command.
///
/// Each line given to [`speak`](Speaker::speak) is passed as-is to the
/// command, speaker attribution included. By default, this uses the following
/// command:
///
/// - On macOS, use `say` command.
/// - On Windows, call [SAPI] via PowerShell.
/// - On others, use `espeak` command.
///
/// On non-Windows platforms, the default can be replaced with
/// [`LocalCommand::with_program`].
///
/// **Disclaimer**: These commands might change over time.
///
/// [SAPI]: https://en.wikipedia.org/wiki/Microsoft_Speech_API
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct LocalCommand {
    program: Option<String>,
}

impl LocalCommand {
    /// Creates a new `LocalCommand` using the platform default program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `LocalCommand` using the specified program instead of
    /// the platform default. Ignored on Windows, which always goes through
    /// PowerShell.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }
}

impl Speaker for LocalCommand {
    fn speak(&self, message: &str) -> Result<WaitFuture, parlance::Error> {
        let (sender, receiver) = tokio::sync::oneshot::channel();
        let message = message.to_string();
        let program = self.program.clone();

        std::thread::spawn(move || {
            let res = run_local_command(program.as_deref(), &message)
                .map_err(|e| parlance::Error::Other(e.into()));
            let _ = sender.send(res);
        });

        Ok(WaitFuture::new(async move {
            receiver.await.map_err(|_| parlance::Error::Canceled {
                message: "command thread exited without reporting".to_string(),
            })?
        }))
    }
}

#[cfg(not(windows))]
fn run_local_command(program: Option<&str>, message: &str) -> io::Result<()> {
    #[cfg(not(target_os = "macos"))]
    const DEFAULT_PROGRAM: &str = "espeak";
    #[cfg(target_os = "macos")]
    const DEFAULT_PROGRAM: &str = "say";

    let program = program.unwrap_or(DEFAULT_PROGRAM);
    let mut cmd = Command::new(program);
    let status = cmd.arg(message).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("failed to run `{program}` with message {message:?}"),
        ))
    }
}

#[cfg(windows)]
fn run_local_command(_program: Option<&str>, message: &str) -> io::Result<()> {
    // TODO: Ideally, it would be more efficient to use SAPI directly via winapi or something.
    // https://stackoverflow.com/questions/1040655/ms-speech-from-command-line
    let cmd = format!("PowerShell -Command \"Add-Type –AssemblyName System.Speech; (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{message}');\"");
    let status = Command::new("powershell").arg(cmd).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("failed to run `powershell` with message {message:?}"),
        ))
    }
}
