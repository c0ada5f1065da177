use serde::{Deserialize, Serialize};

use crate::errors::HgrError;

/// Number of keypoints per detected hand (MediaPipe hand landmark convention).
pub const LANDMARK_COUNT: usize = 21;

/// Wrist anchor, the origin for relative normalization.
pub const WRIST: usize = 0;

/// Fingertip tracked across frames for trajectory classification.
pub const INDEX_FINGER_TIP: usize = 8;

/// A pixel coordinate. `(0, 0)` doubles as the "no point this frame"
/// sentinel in the point history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate2D {
    pub x: i32,
    pub y: i32,
}

impl Coordinate2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate2D { x, y }
    }
}

/// A detector keypoint in normalized `[0, 1]` image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoordinate2D {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    pub const fn new(width: i32, height: i32) -> Self {
        FrameSize { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// One detected hand as reported by the upstream detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandObservation {
    pub landmarks: Vec<NormalizedCoordinate2D>,
    pub handedness: Handedness,
}

/// Detector output for a single frame. The pipeline consumes at most the
/// first hand (single-hand design).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameObservation {
    pub size: FrameSize,
    pub hands: Vec<HandObservation>,
}

impl FrameObservation {
    pub fn empty(size: FrameSize) -> Self {
        FrameObservation { size, hands: Vec::new() }
    }

    pub fn with_hand(size: FrameSize, hand: HandObservation) -> Self {
        FrameObservation { size, hands: vec![hand] }
    }
}

/// The 21 keypoints of one hand projected onto the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSet {
    points: [Coordinate2D; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn from_points(points: [Coordinate2D; LANDMARK_COUNT]) -> Self {
        LandmarkSet { points }
    }

    /// from_observation projects normalized detector landmarks onto a frame
    /// of known dimensions, clamping each axis to `[0, dimension - 1]`.
    ///
    /// # Arguments
    /// * `observation` - one detected hand, must hold exactly 21 landmarks
    /// * `size` - frame dimensions in pixels
    ///
    /// # Returns
    /// * `Result<LandmarkSet, HgrError>`
    pub fn from_observation(observation: &HandObservation, size: FrameSize) -> Result<Self, HgrError> {
        if observation.landmarks.len() != LANDMARK_COUNT {
            return Err(HgrError::MalformedLandmarks {
                expected: LANDMARK_COUNT,
                actual: observation.landmarks.len(),
            });
        }

        let mut points = [Coordinate2D::default(); LANDMARK_COUNT];
        for (point, landmark) in points.iter_mut().zip(observation.landmarks.iter()) {
            point.x = ((landmark.x * size.width as f32) as i32).clamp(0, size.width - 1);
            point.y = ((landmark.y * size.height as f32) as i32).clamp(0, size.height - 1);
        }

        Ok(LandmarkSet { points })
    }

    pub fn points(&self) -> &[Coordinate2D] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Coordinate2D {
        self.points[index]
    }

    pub fn wrist(&self) -> Coordinate2D {
        self.points[WRIST]
    }

    pub fn fingertip(&self) -> Coordinate2D {
        self.points[INDEX_FINGER_TIP]
    }
}
