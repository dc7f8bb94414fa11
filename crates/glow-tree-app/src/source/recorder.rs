//! Records detections from another source as JSON lines

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glow_tree_core::{Detection, LandmarkSource, Result};
use tracing::{info, warn};

use super::{FrameSource, HandCommand};

/// Pass-through source that appends every detection to a file
pub struct Recorder {
    inner: Box<dyn FrameSource>,
    writer: BufWriter<File>,
    name: String,
    frames: usize,
}

impl Recorder {
    /// Start recording `inner` into a new file at `path`
    pub fn create(path: &Path, inner: Box<dyn FrameSource>) -> Result<Self> {
        let writer = BufWriter::new(File::create(path)?);
        let name = format!("{} (recording)", inner.name());
        info!("Recording detections to {}", path.display());
        Ok(Self {
            inner,
            writer,
            name,
            frames: 0,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush buffered lines to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl LandmarkSource for Recorder {
    fn detect(&mut self) -> Result<Detection> {
        let detection = self.inner.detect()?;
        writeln!(self.writer, "{}", detection.to_json_line()?)?;
        self.frames += 1;
        Ok(detection)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FrameSource for Recorder {
    fn steer(&mut self, command: HandCommand) -> bool {
        self.inner.steer(command)
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!("Failed to flush recording: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ReplaySource, SimulatedHand};

    #[test]
    fn test_recording_replays_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        let mut recorded = Vec::new();
        {
            let sim = SimulatedHand::seeded(3);
            let mut recorder = Recorder::create(&path, Box::new(sim)).unwrap();
            recorded.push(recorder.detect().unwrap());
            assert!(recorder.steer(HandCommand::TogglePresence));
            recorded.push(recorder.detect().unwrap());
            recorder.steer(HandCommand::TogglePresence);
            recorded.push(recorder.detect().unwrap());
            assert_eq!(recorder.frames(), 3);
        }

        let mut replay = ReplaySource::open(&path, false).unwrap();
        assert_eq!(replay.len(), 3);
        for expected in recorded {
            assert_eq!(replay.detect().unwrap(), expected);
        }
    }

    #[test]
    fn test_replay_cannot_be_steered() {
        let dir = tempfile::tempdir().unwrap();
        let source = ReplaySource::from_reader(std::io::Cursor::new("null\n"), false).unwrap();
        let mut recorder = Recorder::create(&dir.path().join("out.jsonl"), Box::new(source)).unwrap();
        assert!(!recorder.steer(HandCommand::TogglePush));
        assert_eq!(recorder.name(), "replay (recording)");
    }
}
