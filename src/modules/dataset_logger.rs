use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Error;
use csv::WriterBuilder;

use crate::config::config::DatasetLoggingConfig;

/// Append-only CSV side channel for collecting training samples. Each row
/// is `[label, v0, v1, ..., vN]`; keypoint features and trajectory features
/// go to separate files. Nothing in the pipeline reads these back.
#[derive(Debug, Clone)]
pub struct DatasetLogger {
    keypoint_csv: PathBuf,
    point_history_csv: PathBuf,
}

impl DatasetLogger {
    pub fn new(config: DatasetLoggingConfig) -> Self {
        DatasetLogger {
            keypoint_csv: config.keypoint_csv,
            point_history_csv: config.point_history_csv,
        }
    }

    pub fn log_keypoint(&self, label: u8, features: &[f32]) -> Result<(), Error> {
        self.append(&self.keypoint_csv, label, features)
    }

    pub fn log_point_history(&self, label: u8, features: &[f32]) -> Result<(), Error> {
        self.append(&self.point_history_csv, label, features)
    }

    fn append(&self, path: &Path, label: u8, features: &[f32]) -> Result<(), Error> {
        if label > 9 {
            return Err(Error::msg("dataset_logger - label must be in 0..=9"));
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        let mut record = Vec::with_capacity(features.len() + 1);
        record.push(label.to_string());
        record.extend(features.iter().map(|value| value.to_string()));

        writer.write_record(&record)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::config::DatasetLoggingConfig;
    use crate::modules::dataset_logger::DatasetLogger;

    fn logger_in(dir: &std::path::Path) -> DatasetLogger {
        DatasetLogger::new(DatasetLoggingConfig {
            keypoint_csv: dir.join("keypoint.csv"),
            point_history_csv: dir.join("point_history.csv"),
        })
    }

    #[test]
    fn test_appends_label_then_features() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());

        logger.log_keypoint(3, &[0.5, -1.0]).unwrap();
        logger.log_keypoint(7, &[0.25, 0.0]).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("keypoint.csv")).unwrap();
        assert_eq!(contents, "3,0.5,-1\n7,0.25,0\n");
    }

    #[test]
    fn test_streams_go_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());

        logger.log_keypoint(0, &[1.0]).unwrap();
        logger.log_point_history(1, &[0.5]).unwrap();

        let keypoint = std::fs::read_to_string(dir.path().join("keypoint.csv")).unwrap();
        let point_history = std::fs::read_to_string(dir.path().join("point_history.csv")).unwrap();
        assert_eq!(keypoint, "0,1\n");
        assert_eq!(point_history, "1,0.5\n");
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        assert!(logger.log_keypoint(10, &[0.0]).is_err());
        assert!(!dir.path().join("keypoint.csv").exists());
    }
}
