//! Template store adapters.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryStore;
pub use embedded::EmbeddedStore;
pub use memory::InMemoryStore;
