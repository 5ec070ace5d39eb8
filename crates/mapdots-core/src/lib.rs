//! mapdots core library
//!
//! This crate provides the core functionality for mapdots: labeled points
//! of interest ("dots") placed over a static map image and kept in a single
//! local storage slot.
//!
//! # Architecture
//!
//! - Positions are percentages of the image's rendered box, so dots stay put
//!   when the image is resized.
//! - The `DotStore` is the only owner of the collection. It writes the whole
//!   collection back to its slot after every change.
//! - A `Session` sits in front of the store and handles view/edit mode,
//!   dragging and the detail modal.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut store = DotStore::init(JsonFilePersistence::from_config(&config));
//!
//! let dot = store.create(50.0, 50.0);
//! store.update_content(&dot.id, ContentField::Title, "Harbor");
//! ```
//!
//! # Modules
//!
//! - `store`: the dot store (main entry point)
//! - `models`: dot and content data structures
//! - `geometry`: pixel to percentage conversion and clamping
//! - `interaction`: mode-gated pointer event handling
//! - `storage`: slot persistence
//! - `config`: application configuration

pub mod config;
pub mod geometry;
pub mod interaction;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use geometry::{clamp_percent, Pointer, Rect};
pub use interaction::{DragState, InteractionEvent, Mode, Session};
pub use models::{ContentField, Dot, DotContent, IMAGE_NOT_FOUND_URL};
pub use storage::{DotPersistence, JsonFilePersistence, MemorySlot, StorageError};
pub use store::DotStore;
