use anyhow::Error;

/// Black-box scoring capability backing both classifiers. Implementations
/// wrap a pre-trained model (the reference system uses TFLite interpreters)
/// and return one confidence score per class. Model weights are immutable
/// after load; `infer` is stateless per call.
pub trait InferenceModel: Send {
    fn infer(&self, input: &[f32]) -> Result<Vec<f32>, Error>;
}

/// Index of the highest score, first index on ties.
pub(crate) fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use crate::modules::inference::argmax;

    #[test]
    fn test_argmax_picks_highest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
    }

    #[test]
    fn test_argmax_first_index_on_ties() {
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), 0);
        assert_eq!(argmax(&[0.1, 0.5, 0.5]), 1);
    }
}
