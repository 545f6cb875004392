use super::RecordSource;
use crate::error::Result;
use crate::transform::RegistrationRecord;

#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    records: Vec<RegistrationRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RegistrationRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: RegistrationRecord) {
        self.records.push(record);
    }
}

impl RecordSource for InMemorySource {
    fn load_records(&self) -> Result<Vec<RegistrationRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}
