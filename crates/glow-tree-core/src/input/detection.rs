//! Per-frame detection results and the landmark source abstraction

use serde::{Deserialize, Serialize};

use super::{HandLandmarks, Landmark};
use crate::error::{GlowError, Result};

/// Result of running hand detection on one frame
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// No hand was found; the pipeline skips this frame
    NoHand,
    /// Exactly one hand was found
    OneHand(HandLandmarks),
}

impl Detection {
    pub fn hand(&self) -> Option<&HandLandmarks> {
        match self {
            Detection::NoHand => None,
            Detection::OneHand(hand) => Some(hand),
        }
    }

    pub fn is_hand(&self) -> bool {
        matches!(self, Detection::OneHand(_))
    }

    /// Parse one JSON-lines record: `null` for no hand, otherwise a [`HandRecord`].
    ///
    /// `line` is 1-based and only used for error reporting.
    pub fn from_json_line(text: &str, line: usize) -> Result<Self> {
        let record: Option<HandRecord> = serde_json::from_str(text)
            .map_err(|source| GlowError::MalformedRecord { line, source })?;
        match record {
            None => Ok(Detection::NoHand),
            Some(record) => record.try_into().map(Detection::OneHand),
        }
    }

    /// Serialize as one JSON-lines record
    pub fn to_json_line(&self) -> Result<String> {
        let record = self.hand().map(HandRecord::from);
        Ok(serde_json::to_string(&record)?)
    }
}

impl From<HandLandmarks> for Detection {
    fn from(hand: HandLandmarks) -> Self {
        Detection::OneHand(hand)
    }
}

/// Wire form of one hand: landmark lists as `[x, y, z]` triples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRecord {
    pub landmarks: Vec<[f32; 3]>,
    #[serde(default)]
    pub world_landmarks: Vec<[f32; 3]>,
}

impl TryFrom<HandRecord> for HandLandmarks {
    type Error = GlowError;

    fn try_from(record: HandRecord) -> Result<Self> {
        let screen: Vec<Landmark> = record.landmarks.into_iter().map(Landmark::from).collect();
        let world: Vec<Landmark> = record
            .world_landmarks
            .into_iter()
            .map(Landmark::from)
            .collect();
        HandLandmarks::from_slices(&screen, &world)
    }
}

impl From<&HandLandmarks> for HandRecord {
    fn from(hand: &HandLandmarks) -> Self {
        Self {
            landmarks: hand.landmarks.iter().map(|l| [l.x, l.y, l.z]).collect(),
            world_landmarks: hand.world_landmarks.iter().map(|l| [l.x, l.y, l.z]).collect(),
        }
    }
}

/// Supplier of hand detections, polled once per frame by the host loop.
///
/// Implementations own their own recovery: a detector that is not ready yet,
/// or a camera that was denied, simply keeps reporting [`Detection::NoHand`].
pub trait LandmarkSource {
    /// Latest available detection
    fn detect(&mut self) -> Result<Detection>;

    /// Human readable source name for logs and status lines
    fn name(&self) -> &str;
}
