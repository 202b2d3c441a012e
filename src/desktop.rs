//! Desktop collaborators
//!
//! Audio cues, clipboard writes and link opening. Failures are returned to
//! the caller, which reports them without touching navigation state.

use crate::museum::Sound;
use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Desktop: Debug {
    fn play_sound(&mut self, sound: Sound) -> Result<(), DesktopError>;
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), DesktopError>;
    fn open_link(&mut self, url: &str) -> Result<(), DesktopError>;
}

/// Desktop backed by the terminal bell, the system clipboard and the platform opener.
#[derive(Default)]
pub struct SystemDesktop {
    clipboard: Option<arboard::Clipboard>,
}

impl Debug for SystemDesktop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemDesktop")
            .field("clipboard_ready", &self.clipboard.is_some())
            .finish()
    }
}

impl SystemDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, DesktopError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl Desktop for SystemDesktop {
    fn play_sound(&mut self, sound: Sound) -> Result<(), DesktopError> {
        // Terminal bell stands in for the cue's audio asset.
        log::debug!(
            "{} cue ({} at volume {:.1})",
            sound,
            sound.asset_url(),
            sound.volume()
        );
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), DesktopError> {
        self.clipboard()?.set_text(text.to_string())?;
        Ok(())
    }

    fn open_link(&mut self, url: &str) -> Result<(), DesktopError> {
        launch(opener_command(url))
    }
}

/// Starts `cmd` detached from the terminal and reaps it on a helper thread.
fn launch(mut cmd: Command) -> Result<(), DesktopError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => log::debug!("Opener exited with {}", status),
        Ok(_) => {}
        Err(e) => log::debug!("Could not wait for opener: {}", e),
    });
    Ok(())
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn launch_starts_and_reaps_the_opener() {
        assert!(launch(Command::new("true")).is_ok());
    }

    #[test]
    fn launch_reports_a_missing_opener() {
        let result = launch(Command::new("museum-opener-that-does-not-exist"));
        assert!(matches!(result, Err(DesktopError::Io(_))));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Desktop that records requests; audio and clipboard fail on demand.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingDesktop {
        pub sounds: Vec<Sound>,
        pub links: Vec<String>,
        pub clipboard_fails: bool,
        pub sound_fails: bool,
    }

    impl Desktop for RecordingDesktop {
        fn play_sound(&mut self, sound: Sound) -> Result<(), DesktopError> {
            if self.sound_fails {
                return Err(DesktopError::Io(std::io::Error::other("no audio device")));
            }
            self.sounds.push(sound);
            Ok(())
        }

        fn copy_to_clipboard(&mut self, _text: &str) -> Result<(), DesktopError> {
            if self.clipboard_fails {
                Err(DesktopError::Io(std::io::Error::other("no display")))
            } else {
                Ok(())
            }
        }

        fn open_link(&mut self, url: &str) -> Result<(), DesktopError> {
            self.links.push(url.to_string());
            Ok(())
        }
    }
}
