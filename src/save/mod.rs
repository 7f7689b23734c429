//! Persistence of learned tables.
//!
//! Tables are written as big-endian binary: a magic header, the payload and
//! a `0xFFFF` footer. Training runs also leave a JSON [`Metadata`] sidecar
//! next to each table describing how it was produced.
mod disk;
mod metadata;

pub use disk::*;
pub use metadata::*;
