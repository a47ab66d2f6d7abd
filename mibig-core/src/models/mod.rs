pub mod gene_id;
pub mod location;
pub mod locus;
pub mod taxonomy;

// re-export for cleaner imports
pub use self::gene_id::GeneId;
pub use self::location::Location;
pub use self::locus::Locus;
pub use self::taxonomy::Taxonomy;
