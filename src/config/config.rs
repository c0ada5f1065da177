use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Capacity of both the point history and the gesture-id history.
    pub history_length: usize,
    /// Hand-sign class whose fingertip gets tracked across frames.
    pub pointing_class_id: i32,
    /// Sentinel emitted when no hand is usable this frame.
    pub no_hand_id: i32,
    /// Gesture id reported while the trajectory buffer is still filling.
    pub neutral_gesture_id: i32,
}

impl PipelineConfig {
    pub fn new() -> Self {
        PipelineConfig {
            history_length: 16,
            pointing_class_id: 2,
            no_hand_id: -1,
            neutral_gesture_id: 0,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointHistoryClassifierConfig {
    /// Confidence below which the classifier result is forced to `invalid_value`.
    pub score_th: f32,
    pub invalid_value: i32,
}

impl PointHistoryClassifierConfig {
    pub fn new() -> Self {
        PointHistoryClassifierConfig {
            score_th: 0.5,
            invalid_value: 0,
        }
    }
}

impl Default for PointHistoryClassifierConfig {
    fn default() -> Self {
        PointHistoryClassifierConfig::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetLoggingConfig {
    pub keypoint_csv: PathBuf,
    pub point_history_csv: PathBuf,
}

impl DatasetLoggingConfig {
    pub fn new() -> Self {
        DatasetLoggingConfig {
            keypoint_csv: PathBuf::from("model/keypoint_classifier/keypoint.csv"),
            point_history_csv: PathBuf::from("model/point_history_classifier/point_history.csv"),
        }
    }
}

impl Default for DatasetLoggingConfig {
    fn default() -> Self {
        DatasetLoggingConfig::new()
    }
}
