use anyhow::Error;

use crate::modules::inference::{argmax, InferenceModel};

/// Static hand-pose classifier. Maps the 42-float landmark feature vector
/// to a hand-sign class id by argmax over the model's score vector.
pub struct KeypointClassifier {
    model: Box<dyn InferenceModel>,
}

impl KeypointClassifier {
    pub fn new(model: Box<dyn InferenceModel>) -> Self {
        KeypointClassifier { model }
    }

    /// classify returns the hand-sign class for one frame's landmark features.
    ///
    /// # Arguments
    /// * `landmark_features` - normalized feature vector of length 42
    ///
    /// # Returns
    /// * `Result<i32, Error>`
    pub fn classify(&self, landmark_features: &[f32]) -> Result<i32, Error> {
        let scores = self.model.infer(landmark_features)?;
        if scores.is_empty() {
            return Err(Error::msg("keypoint_classifier - model returned an empty score vector"));
        }
        Ok(argmax(&scores) as i32)
    }
}
