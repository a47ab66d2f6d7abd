//!
//! Genome record lookup.
//!
//! Validation only needs to ask a genome record whether it knows a gene
//! identifier (and, for loci and taxonomy, what its accession and organism are).
//! Parsing sequence files into records happens elsewhere; [`GenomeRecord`] is the
//! in-memory form such a parser produces.
//!
use fxhash::FxHashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("At least one of locus_tag, gene, or protein_id is required")]
    MissingIdentifier,
    #[error("Record accession must not be empty")]
    MissingAccession,
}

///
/// The lookup capability validation consults.
///
pub trait RecordLookup: Send + Sync {
    fn has_identifier(&self, name: &str) -> bool;

    fn accession(&self) -> Option<&str> {
        None
    }

    fn organism(&self) -> Option<&str> {
        None
    }

    fn ncbi_tax_id(&self) -> Option<u64> {
        None
    }
}

const INVALID_CHARS: &[char] = &[
    '!', '?', ',', ';', ':', '=', '+', '*', '&', '^', '%', '$', '#', '@', ' ', '\t', '\n', '\r',
    '\\', '/', '[', ']', '{', '}', '(', ')', '<', '>', '|', '~', '`', '\'', '"',
];

fn sanitise_identifier(identifier: Option<&str>) -> Option<String> {
    let cleaned: String = identifier?
        .chars()
        .filter(|c| !INVALID_CHARS.contains(c))
        .collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

///
/// A coding sequence, addressable by any of its identifiers.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cds {
    locus_tag: Option<String>,
    gene: Option<String>,
    protein_id: Option<String>,
}

impl Cds {
    ///
    /// Create a CDS from its raw identifiers. Punctuation and whitespace are
    /// stripped from each identifier.
    ///
    /// # Arguments
    /// - `locus_tag`, `gene`, `protein_id`: at least one must survive sanitising
    ///
    pub fn new(
        locus_tag: Option<&str>,
        gene: Option<&str>,
        protein_id: Option<&str>,
    ) -> Result<Self, RecordError> {
        let cds = Cds {
            locus_tag: sanitise_identifier(locus_tag),
            gene: sanitise_identifier(gene),
            protein_id: sanitise_identifier(protein_id),
        };
        if cds.locus_tag.is_none() && cds.gene.is_none() && cds.protein_id.is_none() {
            return Err(RecordError::MissingIdentifier);
        }
        Ok(cds)
    }

    ///
    /// The preferred name: locus tag, then gene name, then protein id.
    ///
    pub fn name(&self) -> &str {
        self.locus_tag
            .as_deref()
            .or(self.gene.as_deref())
            .or(self.protein_id.as_deref())
            .unwrap_or_default()
    }

    pub fn has_name(&self, name: &str) -> bool {
        [&self.locus_tag, &self.gene, &self.protein_id]
            .into_iter()
            .any(|id| id.as_deref() == Some(name))
    }
}

///
/// An annotated nucleotide record: accession, organism and the CDS features on it.
///
#[derive(Debug, Clone, Default)]
pub struct GenomeRecord {
    pub accession: String,
    pub organism: Option<String>,
    pub ncbi_tax_id: Option<u64>,
    cdses: Vec<Cds>,
    by_locus: FxHashMap<String, usize>,
    by_gene: FxHashMap<String, usize>,
    by_protein: FxHashMap<String, usize>,
}

impl GenomeRecord {
    pub fn new(accession: &str, cdses: Vec<Cds>) -> Self {
        let mut record = GenomeRecord {
            accession: accession.to_string(),
            ..Default::default()
        };
        for cds in cdses {
            record.add_cds(cds);
        }
        record
    }

    ///
    /// Like [`GenomeRecord::new`], but refuses an empty accession.
    ///
    pub fn try_new(accession: &str, cdses: Vec<Cds>) -> Result<Self, RecordError> {
        if accession.is_empty() {
            return Err(RecordError::MissingAccession);
        }
        Ok(Self::new(accession, cdses))
    }

    pub fn with_organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = Some(organism.into());
        self
    }

    pub fn with_ncbi_tax_id(mut self, tax_id: u64) -> Self {
        self.ncbi_tax_id = Some(tax_id);
        self
    }

    pub fn add_cds(&mut self, cds: Cds) {
        let idx = self.cdses.len();
        if let Some(locus_tag) = &cds.locus_tag {
            self.by_locus.insert(locus_tag.clone(), idx);
        }
        if let Some(gene) = &cds.gene {
            self.by_gene.insert(gene.clone(), idx);
        }
        if let Some(protein_id) = &cds.protein_id {
            self.by_protein.insert(protein_id.clone(), idx);
        }
        self.cdses.push(cds);
    }

    pub fn cdses(&self) -> &[Cds] {
        &self.cdses
    }

    ///
    /// Find a CDS by locus tag, falling back to gene name and then protein id.
    ///
    pub fn get_cds(&self, name: &str) -> Option<&Cds> {
        self.by_locus
            .get(name)
            .or_else(|| self.by_gene.get(name))
            .or_else(|| self.by_protein.get(name))
            .map(|&idx| &self.cdses[idx])
    }

    pub fn has_cds(&self, name: &str) -> bool {
        self.get_cds(name).is_some()
    }
}

impl RecordLookup for GenomeRecord {
    fn has_identifier(&self, name: &str) -> bool {
        self.has_cds(name)
    }

    fn accession(&self) -> Option<&str> {
        Some(&self.accession)
    }

    fn organism(&self) -> Option<&str> {
        self.organism.as_deref()
    }

    fn ncbi_tax_id(&self) -> Option<u64> {
        self.ncbi_tax_id
    }
}
