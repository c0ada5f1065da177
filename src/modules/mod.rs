pub mod dataset_logger;
pub mod inference;
pub mod keypoint_classifier;
pub mod point_history_classifier;
