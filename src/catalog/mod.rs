//! Option catalog access and per-solve snapshots.
//!
//! - [`OptionSource`] — trait seam to the external record store
//! - [`InMemoryCatalog`] — reference in-memory implementation
//! - [`Snapshot`] — filtered, duration-normalized option set for one solve

mod snapshot;
mod source;

pub use snapshot::Snapshot;
pub use source::{InMemoryCatalog, OptionSource};
