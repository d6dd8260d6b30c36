//! Persisting search results to disk
//!
//! [`FileWriter`] writes a payload to a path, creating the parent directory on
//! demand, and logs instead of failing. Filesystem access goes through the
//! [`Filesystem`] trait so the failure paths can be exercised without touching
//! real permissions.

mod local;
mod traits;
mod writer;

pub use local::LocalFilesystem;
pub use traits::Filesystem;
pub use writer::FileWriter;
