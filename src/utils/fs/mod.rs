//! File system utilities.

pub mod discovery;

pub use discovery::find_descriptors;
