//! # Record Sources
//!
//! Where backend registration records come from. The core never talks to the network;
//! a [`RecordSource`] hands it records that something else already fetched.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: a JSON file saved from the backend, either a bare array of
//!   records or the `{ "success": true, "data": [...] }` envelope.
//! - [`memory::InMemorySource`]: a fixed list, for tests.
//!
//! Sources are read-only.

use crate::error::Result;
use crate::transform::RegistrationRecord;

pub mod fs;
pub mod memory;

pub trait RecordSource {
    fn load_records(&self) -> Result<Vec<RegistrationRecord>>;

    /// Short human description, used in log lines.
    fn describe(&self) -> String;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn load_records(&self) -> Result<Vec<RegistrationRecord>> {
        (**self).load_records()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
