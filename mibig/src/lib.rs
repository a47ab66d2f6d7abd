//! Typed MIBiG annotation records.
//!
//! Each record family lives in its own crate and is re-exported here behind a
//! cargo feature of the same name:
//!
//! - `core`: citations, evidence, validation context, genome record lookup
//! - `biosynthesis`: biosynthetic modules and their domains
//! - `genes`: gene function annotations
//!
#[cfg(feature = "core")]
#[doc(inline)]
pub use mibig_core as core;

#[cfg(feature = "biosynthesis")]
#[doc(inline)]
pub use mibig_biosynthesis as biosynthesis;

#[cfg(feature = "genes")]
#[doc(inline)]
pub use mibig_genes as genes;
