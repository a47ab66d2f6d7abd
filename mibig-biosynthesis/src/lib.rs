//! # mibig-biosynthesis
//!
//! Biosynthetic module records: the shared envelope, the nine kind-specific
//! payloads and the domains they carry.
//!
//! ## Main Components
//!
//! - **`Module`**: the envelope. Built from JSON with [`JsonEntity::from_json`],
//!   which validates atomically and reports every issue at once
//! - **`ModuleType` / `ModuleInfo`**: the closed set of type tags and the payload
//!   each one selects
//! - **`Domain`**, **`Monomer`**, **`NonCanonicalActivity`**: the value objects
//!   a module owns
//!
//! ## Example
//!
//! ```rust
//! use mibig_biosynthesis::{JsonEntity, Module, ModuleType};
//! use mibig_core::{QualityLevel, ValidationContext};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "type": "nrps-type1",
//!     "name": "module 1",
//!     "genes": ["nrpA"],
//!     "active": true,
//!     "a_domain": {
//!         "gene": "nrpA",
//!         "location": {"from": 100, "to": 500},
//!         "references": ["pubmed:12345"]
//!     },
//!     "carriers": [{"gene": "nrpA", "location": {"from": 600, "to": 680}}]
//! });
//!
//! let ctx = ValidationContext::new(QualityLevel::High);
//! let module = Module::from_json(&raw, &ctx).unwrap();
//! assert_eq!(module.module_type(), ModuleType::NrpsType1);
//! assert_eq!(module.citations().len(), 1);
//! assert_eq!(module.to_json().unwrap(), raw);
//! ```
//!
pub mod domain;
pub mod module;
pub mod modules;
pub mod monomer;

// re-export things
pub use domain::*;
pub use module::*;
pub use modules::*;
pub use monomer::*;

pub use mibig_core::JsonEntity;
