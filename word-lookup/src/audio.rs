use std::process::Stdio;

use anyhow::{bail, Context};
use dictionary::Entry;

use crate::render::EntryView;

pub struct AudioPlayer {
    program: String,
}

impl AudioPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the player on `url` and waits for it to finish.
    pub async fn play(&self, url: &str) -> anyhow::Result<()> {
        tracing::debug!(program = %self.program, %url, "starting audio player");
        let status = tokio::process::Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to start audio player '{}'", self.program))?;
        if !status.success() {
            bail!("audio player '{}' exited with {status}", self.program);
        }
        Ok(())
    }
}

/// 1-based entry number from the `play` argument, defaulting to the first entry.
pub fn entry_number(argument: Option<&str>) -> Option<usize> {
    match argument {
        None => Some(1),
        Some(argument) => argument.parse::<usize>().ok().filter(|&number| number > 0),
    }
}

/// Audio shown for entry `number`, if that entry has an audio control.
pub fn audio_for(entries: &[Entry], number: usize) -> Option<&str> {
    let entry = entries.get(number.checked_sub(1)?)?;
    EntryView::new(entry).audio
}
