//! JSON-file-backed storage provider.

pub mod store;

pub use store::FileStore;
