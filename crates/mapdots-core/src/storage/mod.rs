//! Storage layer
//!
//! Handles the single persisted slot holding the dots collection.
//!
//! ## Architecture
//!
//! - **codec**: JSON array layout shared by every adapter
//! - **persistence**: the `DotPersistence` seam and the file-backed slot
//! - **memory**: an in-memory slot for embedding hosts and tests

pub mod codec;
pub mod error;
pub mod memory;
pub mod persistence;

pub use codec::{decode_dots, encode_dots};
pub use error::{StorageError, StorageResult};
pub use memory::MemorySlot;
pub use persistence::{DotPersistence, JsonFilePersistence};
