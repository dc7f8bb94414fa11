//! JSON-lines landmark playback
//!
//! One detection per line: `null` for a frame without a hand, otherwise
//! `{"landmarks": [[x, y, z], ...], "world_landmarks": [[x, y, z], ...]}`.
//! Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glow_tree_core::{Detection, LandmarkSource, Result};
use tracing::{debug, info};

use super::FrameSource;

/// Plays back recorded detections, one per frame
pub struct ReplaySource {
    name: String,
    frames: Vec<Detection>,
    cursor: usize,
    looping: bool,
}

impl ReplaySource {
    /// Load a recording; fails on the first malformed line
    pub fn open(path: &Path, looping: bool) -> Result<Self> {
        let file = File::open(path)?;
        let mut source = Self::from_reader(BufReader::new(file), looping)?;
        source.name = format!("replay:{}", path.display());
        info!("Loaded {} frames from {}", source.len(), path.display());
        Ok(source)
    }

    pub fn from_reader(reader: impl BufRead, looping: bool) -> Result<Self> {
        let mut frames = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            frames.push(Detection::from_json_line(&line, i + 1)?);
        }
        Ok(Self {
            name: "replay".to_string(),
            frames,
            cursor: 0,
            looping,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether a non-looping replay has run out of frames
    pub fn is_finished(&self) -> bool {
        !self.looping && self.cursor >= self.frames.len()
    }
}

impl LandmarkSource for ReplaySource {
    fn detect(&mut self) -> Result<Detection> {
        if self.cursor >= self.frames.len() {
            if !self.looping || self.frames.is_empty() {
                return Ok(Detection::NoHand);
            }
            debug!("Replay wrapped around");
            self.cursor = 0;
        }
        let frame = self.frames[self.cursor].clone();
        self.cursor += 1;
        Ok(frame)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FrameSource for ReplaySource {}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_tree_core::{GlowError, ScreenPoint, SyntheticHand};
    use std::io::{Cursor, Write};

    fn recording() -> String {
        let hand = Detection::OneHand(SyntheticHand::pointing_at(ScreenPoint::CENTER).build());
        format!("null\n{}\n\n{}\n", hand.to_json_line().unwrap(), "null")
    }

    #[test]
    fn test_plays_frames_in_order() {
        let mut replay = ReplaySource::from_reader(Cursor::new(recording()), false).unwrap();
        assert_eq!(replay.len(), 3);
        assert_eq!(replay.detect().unwrap(), Detection::NoHand);
        assert!(replay.detect().unwrap().is_hand());
        assert_eq!(replay.detect().unwrap(), Detection::NoHand);
        assert!(replay.is_finished());
        // Exhausted replays keep reporting no hand
        assert_eq!(replay.detect().unwrap(), Detection::NoHand);
    }

    #[test]
    fn test_looping() {
        let mut replay = ReplaySource::from_reader(Cursor::new(recording()), true).unwrap();
        for _ in 0..3 {
            replay.detect().unwrap();
        }
        assert!(!replay.is_finished());
        assert_eq!(replay.detect().unwrap(), Detection::NoHand);
        assert!(replay.detect().unwrap().is_hand());
    }

    #[test]
    fn test_bad_line_number() {
        let text = "null\n{\"landmarks\": [[0.1, 0.2, 0.0]]}\n";
        let err = ReplaySource::from_reader(Cursor::new(text), false).err().unwrap();
        assert!(matches!(
            err,
            GlowError::InvalidLandmarkCount {
                expected: 21,
                actual: 1
            }
        ));

        let err = ReplaySource::from_reader(Cursor::new("null\n\n[oops\n"), false).err().unwrap();
        assert!(matches!(err, GlowError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", recording()).unwrap();
        let replay = ReplaySource::open(file.path(), false).unwrap();
        assert_eq!(replay.len(), 3);
        assert!(replay.name().starts_with("replay:"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReplaySource::open(&dir.path().join("none.jsonl"), false).err().unwrap();
        assert!(matches!(err, GlowError::Io(_)));
    }
}
