use super::RecordSource;
use crate::error::Result;
use crate::transform::{ApiEnvelope, RegistrationRecord};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    Bare(Vec<RegistrationRecord>),
    Envelope(ApiEnvelope<Vec<RegistrationRecord>>),
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> Result<Vec<RegistrationRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = match serde_json::from_str::<RecordsFile>(&content) {
            Ok(RecordsFile::Bare(records)) => records,
            Ok(RecordsFile::Envelope(envelope)) => envelope.into_data()?,
            // Untagged errors say nothing useful; re-parse with the shape the file has to
            // surface the real field-level message.
            Err(_) if content.trim_start().starts_with('{') => {
                serde_json::from_str::<ApiEnvelope<Vec<RegistrationRecord>>>(&content)?
                    .into_data()?
            }
            Err(_) => serde_json::from_str::<Vec<RegistrationRecord>>(&content)?,
        };
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
