//! # mibig-genes
//!
//! Functional annotations of the genes in a biosynthetic gene cluster.
//!
//! A [`GeneFunction`] names what a gene does from a closed vocabulary, backs
//! the claim with [`FunctionEvidence`] and may describe the phenotype of a
//! mutant. Construction from JSON validates atomically, like every other
//! record in the workspace.
//!
//! ```rust
//! use mibig_core::{JsonEntity, QualityLevel, ValidationContext};
//! use mibig_genes::GeneFunction;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "function": {"name": "Resistance/immunity"},
//!     "evidence": [{"method": "Heterologous expression", "references": ["pubmed:42"]}]
//! });
//! let ctx = ValidationContext::new(QualityLevel::Medium);
//! let function = GeneFunction::from_json(&raw, &ctx).unwrap();
//! assert_eq!(function.citations().len(), 1);
//! ```
//!
pub mod function;

pub use function::*;
