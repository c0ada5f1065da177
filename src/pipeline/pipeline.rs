use anyhow::Error;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::config::PipelineConfig;
use crate::errors::HgrError;
use crate::helper::hand_helper::{normalize_landmarks, normalize_point_history};
use crate::modules::dataset_logger::DatasetLogger;
use crate::modules::keypoint_classifier::KeypointClassifier;
use crate::modules::point_history_classifier::PointHistoryClassifier;
use crate::utils::coordinate::{Coordinate2D, FrameObservation, Handedness, LandmarkSet};
use crate::utils::history::HistoryBuffer;
use crate::utils::voting::most_common;

/// "No point this frame" sentinel pushed into the point history.
const NO_POINT: Coordinate2D = Coordinate2D::new(0, 0);

/// Dataset-logging mode. `Idle` disables the side channel; the other two
/// select which feature stream gets appended. Sticky across frames until a
/// control event changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Idle,
    LogKeypoint,
    LogTrajectory,
}

/// Discrete control input selecting the logging mode or the pending label.
/// The event source (keyboard, external command) is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    SelectIdle,
    SelectLogKeypoint,
    SelectLogTrajectory,
    SelectLabel(u8),
}

impl ControlEvent {
    /// from_key maps the reference key bindings onto control events:
    /// `n`/`k`/`h` select the mode, digits `0`-`9` select the label.
    pub fn from_key(key: u8) -> Option<ControlEvent> {
        match key {
            b'0'..=b'9' => Some(ControlEvent::SelectLabel(key - b'0')),
            b'n' => Some(ControlEvent::SelectIdle),
            b'k' => Some(ControlEvent::SelectLogKeypoint),
            b'h' => Some(ControlEvent::SelectLogTrajectory),
            _ => None,
        }
    }
}

/// Per-frame output of the pipeline. `hand_sign_id` names the static hand
/// pose, `finger_gesture_id` the vote-stabilized motion class. Both carry
/// the no-hand sentinel when the frame had no usable hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDecision {
    pub hand_sign_id: i32,
    pub finger_gesture_id: i32,
    pub handedness: Option<Handedness>,
}

/// Per-frame gesture recognition driver.
///
/// Owns both history buffers and the mode/label state; `advance` is the
/// single entry point and takes `&mut self`, so the single-writer contract
/// is enforced by the borrow checker. Hosts delivering frames from several
/// threads must serialize calls externally, `advance` is not reentrant.
pub struct HgrPipeline {
    keypoint_classifier: KeypointClassifier,
    point_history_classifier: PointHistoryClassifier,
    dataset_logger: Option<DatasetLogger>,
    point_history: HistoryBuffer<Coordinate2D>,
    finger_gesture_history: HistoryBuffer<i32>,
    history_length: usize,
    pointing_class_id: i32,
    no_hand_id: i32,
    neutral_gesture_id: i32,
    mode: Mode,
    pending_label: Option<u8>,
}

impl HgrPipeline {
    /// new initializes new instance of the pipeline.
    ///
    /// # Arguments
    /// * `config` - history length, class-id configuration
    /// * `keypoint_classifier` - static hand-pose classifier
    /// * `point_history_classifier` - dynamic trajectory classifier
    /// * `dataset_logger` - optional CSV side channel for training samples
    pub fn new(
        config: PipelineConfig,
        keypoint_classifier: KeypointClassifier,
        point_history_classifier: PointHistoryClassifier,
        dataset_logger: Option<DatasetLogger>,
    ) -> Self {
        HgrPipeline {
            keypoint_classifier,
            point_history_classifier,
            dataset_logger,
            point_history: HistoryBuffer::new(config.history_length),
            finger_gesture_history: HistoryBuffer::new(config.history_length),
            history_length: config.history_length,
            pointing_class_id: config.pointing_class_id,
            no_hand_id: config.no_hand_id,
            neutral_gesture_id: config.neutral_gesture_id,
            mode: Mode::Idle,
            pending_label: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Currently buffered fingertip trajectory, oldest to newest.
    pub fn point_history(&self) -> Vec<Coordinate2D> {
        self.point_history.snapshot()
    }

    /// handle_control applies a mode/label control event. The mode persists
    /// across frames; the label is consumed by the next `advance`.
    pub fn handle_control(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SelectIdle => self.mode = Mode::Idle,
            ControlEvent::SelectLogKeypoint => self.mode = Mode::LogKeypoint,
            ControlEvent::SelectLogTrajectory => self.mode = Mode::LogTrajectory,
            ControlEvent::SelectLabel(label) => self.pending_label = Some(label),
        }
    }

    /// advance runs the per-frame state machine over one detector observation.
    ///
    /// No hand: the `(0, 0)` sentinel is pushed into the point history and
    /// both outputs carry the no-hand id. With a hand: the landmark features
    /// drive the static classifier, the fingertip is tracked while the
    /// pointing sign is held, and the dynamic classifier runs only once the
    /// trajectory buffer is full, with its output stabilized by majority
    /// vote over the gesture-id history. A degenerate landmark set (zero
    /// spatial extent) skips classification for this frame only.
    ///
    /// # Arguments
    /// * `frame` - detector output for one frame; only the first hand is used
    ///
    /// # Returns
    /// * `Result<FrameDecision, Error>`
    pub fn advance(&mut self, frame: &FrameObservation) -> Result<FrameDecision, Error> {
        // The label only applies to the frame that follows its key event.
        let label = self.pending_label.take();

        let Some(hand) = frame.hands.first() else {
            self.point_history.push(NO_POINT);
            debug!("no hand detected");
            return Ok(self.no_hand_decision());
        };

        let landmarks = LandmarkSet::from_observation(hand, frame.size)?;

        let landmark_features = match normalize_landmarks(&landmarks) {
            Ok(features) => features,
            Err(HgrError::DegenerateInput) => {
                warn!("degenerate landmark set, skipping classification for this frame");
                self.point_history.push(NO_POINT);
                return Ok(self.no_hand_decision());
            }
            Err(e) => return Err(e.into()),
        };

        let hand_sign_id = self.keypoint_classifier.classify(&landmark_features)?;
        if hand_sign_id == self.pointing_class_id {
            self.point_history.push(landmarks.fingertip());
        } else {
            self.point_history.push(NO_POINT);
        }

        let trajectory = self.point_history.snapshot();
        let trajectory_features = normalize_point_history(&trajectory, frame.size);

        let finger_gesture_id = if trajectory_features.len() == self.history_length * 2 {
            self.point_history_classifier.classify(&trajectory_features)?
        } else {
            self.neutral_gesture_id
        };

        self.finger_gesture_history.push(finger_gesture_id);
        let voted_gesture_id = most_common(&self.finger_gesture_history.snapshot())?;

        if let Some(label) = label {
            self.log_dataset(label, &landmark_features, &trajectory_features)?;
        }

        debug!(hand_sign_id, voted_gesture_id, "frame classified");

        Ok(FrameDecision {
            hand_sign_id,
            finger_gesture_id: voted_gesture_id,
            handedness: Some(hand.handedness),
        })
    }

    fn no_hand_decision(&self) -> FrameDecision {
        FrameDecision {
            hand_sign_id: self.no_hand_id,
            finger_gesture_id: self.no_hand_id,
            handedness: None,
        }
    }

    fn log_dataset(
        &self,
        label: u8,
        landmark_features: &[f32],
        trajectory_features: &[f32],
    ) -> Result<(), Error> {
        let Some(logger) = &self.dataset_logger else {
            return Ok(());
        };
        match self.mode {
            Mode::Idle => Ok(()),
            Mode::LogKeypoint => logger.log_keypoint(label, landmark_features),
            Mode::LogTrajectory => logger.log_point_history(label, trajectory_features),
        }
    }
}
