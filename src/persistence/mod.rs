//! Durable persistence for the board
//!
//! Features:
//! - Injected key-value port (LocalStorage, files, memory)
//! - Auto-saved current-state slot
//! - Single overwrite-on-save snapshot slot
//! - Corruption falls back to "absent", never fatal

pub mod slots;
pub mod storage;

pub use slots::Slots;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, StoragePort};
