//! # mibig-core
//!
//! Shared building blocks for MIBiG annotation records.
//!
//! ## Main Components
//!
//! - **`Citation`**: a `database:value` literature or database reference
//! - **`Evidence`**: a method from a closed vocabulary plus supporting citations
//! - **`ValidationContext`**: quality level and optional genome record threaded
//!   through every `validate` call
//! - **`ValidationIssue` / `ValidationError`**: collected, never short-circuited,
//!   validation failures
//! - **`GenomeRecord`**: in-memory genome record that gene identifiers resolve against
//!
//! ## Example
//!
//! ```rust
//! use mibig_core::{Citation, QualityLevel, SubstrateEvidence, Validate, ValidationContext};
//!
//! let ctx = ValidationContext::new(QualityLevel::High);
//! let evidence = SubstrateEvidence::new("NMR", vec![Citation::new("pubmed", "12345").unwrap()]);
//! assert!(evidence.validate(&ctx).is_empty());
//! ```
//!
pub mod citation;
pub mod config;
pub mod errors;
pub mod evidence;
pub mod models;
pub mod record;
pub mod utils;
pub mod validation;

// re-export things
pub use citation::*;
pub use config::*;
pub use errors::*;
pub use evidence::*;
pub use models::*;
pub use record::*;
pub use utils::*;
pub use validation::*;
