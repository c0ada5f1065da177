use anyhow::Error;

use crate::config::config::PointHistoryClassifierConfig;
use crate::modules::inference::{argmax, InferenceModel};

/// Dynamic trajectory classifier. Maps a full trajectory feature window to
/// a finger-gesture class id, forcing the configured invalid value when the
/// winning score falls below the confidence threshold.
pub struct PointHistoryClassifier {
    model: Box<dyn InferenceModel>,
    pub score_th: f32,
    pub invalid_value: i32,
}

impl PointHistoryClassifier {
    pub fn new(model: Box<dyn InferenceModel>, config: PointHistoryClassifierConfig) -> Self {
        PointHistoryClassifier {
            model,
            score_th: config.score_th,
            invalid_value: config.invalid_value,
        }
    }

    /// classify returns the finger-gesture class for a trajectory window.
    ///
    /// # Arguments
    /// * `point_history_features` - normalized trajectory vector of length `2H`
    ///
    /// # Returns
    /// * `Result<i32, Error>`
    pub fn classify(&self, point_history_features: &[f32]) -> Result<i32, Error> {
        let scores = self.model.infer(point_history_features)?;
        if scores.is_empty() {
            return Err(Error::msg("point_history_classifier - model returned an empty score vector"));
        }

        let best = argmax(&scores);
        if scores[best] < self.score_th {
            return Ok(self.invalid_value);
        }
        Ok(best as i32)
    }
}
