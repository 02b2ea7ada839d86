pub mod memory;
pub mod store;

pub mod dynamo;

pub use store::RecordingStore;
