pub mod local;
pub mod store;

pub mod s3;

pub use store::ObjectStore;
