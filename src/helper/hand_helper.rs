use crate::errors::HgrError;
use crate::utils::coordinate::{Coordinate2D, FrameSize, LandmarkSet, LANDMARK_COUNT};

/// normalize_landmarks turns a landmark set into the scale- and
/// translation-invariant feature vector fed to the keypoint classifier.
///
/// Every landmark is taken relative to the wrist anchor, flattened in
/// landmark-then-axis order and divided by the maximum absolute value, so
/// the result has length 42 and a max absolute value of exactly 1.0.
///
/// # Arguments
/// * `landmarks` - the 21 projected keypoints of one hand
///
/// # Returns
/// * `Result<Vec<f32>, HgrError>` - `DegenerateInput` when every landmark
///   coincides with the wrist and the vector has no scale
pub fn normalize_landmarks(landmarks: &LandmarkSet) -> Result<Vec<f32>, HgrError> {
    let base = landmarks.wrist();

    let mut features = Vec::with_capacity(LANDMARK_COUNT * 2);
    for point in landmarks.points() {
        features.push((point.x - base.x) as f32);
        features.push((point.y - base.y) as f32);
    }

    let max_value = features.iter().fold(0.0f32, |max, value| max.max(value.abs()));
    if max_value == 0.0 {
        return Err(HgrError::DegenerateInput);
    }

    for value in &mut features {
        *value /= max_value;
    }

    Ok(features)
}

/// normalize_point_history turns the buffered fingertip trajectory into the
/// relative feature vector fed to the point-history classifier.
///
/// The oldest buffered point is the origin; x offsets are divided by the
/// frame width and y offsets by the frame height. The `(0, 0)` "no point"
/// sentinel is not special-cased, it is normalized like any other point.
/// Output length is `2 * history.len()`.
///
/// # Arguments
/// * `history` - trajectory points, oldest to newest
/// * `size` - frame dimensions in pixels
///
/// # Returns
/// * `Vec<f32>`
pub fn normalize_point_history(history: &[Coordinate2D], size: FrameSize) -> Vec<f32> {
    let mut features = Vec::with_capacity(history.len() * 2);

    if let Some(base) = history.first() {
        for point in history {
            features.push((point.x - base.x) as f32 / size.width as f32);
            features.push((point.y - base.y) as f32 / size.height as f32);
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use crate::errors::HgrError;
    use crate::helper::hand_helper::{normalize_landmarks, normalize_point_history};
    use crate::utils::coordinate::{Coordinate2D, FrameSize, LandmarkSet, LANDMARK_COUNT};

    fn landmark_set_with_wrist_at(wrist: Coordinate2D) -> LandmarkSet {
        let mut points = [wrist; LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate().skip(1) {
            point.x = wrist.x + i as i32 * 3;
            point.y = wrist.y - i as i32 * 2;
        }
        LandmarkSet::from_points(points)
    }

    #[test]
    fn test_normalize_landmarks_shape_and_range() {
        let set = landmark_set_with_wrist_at(Coordinate2D::new(100, 200));
        let features = normalize_landmarks(&set).unwrap();

        assert_eq!(features.len(), 42);
        // Wrist-relative: the anchor itself maps to (0, 0).
        assert_eq!(features[0], 0.0);
        assert_eq!(features[1], 0.0);

        let max_abs = features.iter().fold(0.0f32, |max, v| max.max(v.abs()));
        assert!((max_abs - 1.0).abs() < 1e-6);
        assert!(features.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_normalize_landmarks_is_translation_invariant() {
        let a = normalize_landmarks(&landmark_set_with_wrist_at(Coordinate2D::new(0, 0))).unwrap();
        let b = normalize_landmarks(&landmark_set_with_wrist_at(Coordinate2D::new(317, 89))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_landmarks_degenerate_hand() {
        let points = [Coordinate2D::new(50, 50); LANDMARK_COUNT];
        let set = LandmarkSet::from_points(points);
        assert_eq!(normalize_landmarks(&set).unwrap_err(), HgrError::DegenerateInput);
    }

    #[test]
    fn test_normalize_point_history_relative_to_oldest() {
        let size = FrameSize::new(100, 50);
        let history = vec![
            Coordinate2D::new(10, 20),
            Coordinate2D::new(30, 20),
            Coordinate2D::new(10, 45),
        ];
        let features = normalize_point_history(&history, size);
        assert_eq!(features, vec![0.0, 0.0, 0.2, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_normalize_point_history_keeps_sentinels() {
        // The (0, 0) "no detection" sentinel is normalized like a real point.
        let size = FrameSize::new(100, 100);
        let history = vec![Coordinate2D::new(50, 50), Coordinate2D::new(0, 0)];
        let features = normalize_point_history(&history, size);
        assert_eq!(features, vec![0.0, 0.0, -0.5, -0.5]);
    }

    #[test]
    fn test_normalize_point_history_empty() {
        let features = normalize_point_history(&[], FrameSize::new(100, 100));
        assert!(features.is_empty());
    }

    #[test]
    fn test_normalize_point_history_length_grows_with_buffer() {
        let size = FrameSize::new(640, 480);
        for len in 1..=16 {
            let history: Vec<Coordinate2D> =
                (0..len).map(|i| Coordinate2D::new(i, i * 2)).collect();
            let features = normalize_point_history(&history, size);
            assert_eq!(features.len(), 2 * len as usize);
        }
    }
}
