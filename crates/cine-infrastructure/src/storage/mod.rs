pub mod atomic_file;
pub mod local_storage;
pub mod memory;

pub use atomic_file::{AtomicFile, FileFormat};
pub use local_storage::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
