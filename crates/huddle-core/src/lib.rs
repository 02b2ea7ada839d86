pub mod error;
pub mod key;
pub mod types;

pub use error::{HuddleError, Result};
pub use key::RecordingKey;
pub use types::{ObjectPayload, RecordingRecord, RecordingStatus};
