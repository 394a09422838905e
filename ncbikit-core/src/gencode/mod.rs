//! Genetic code tables.
//!
//! NCBI distributes each genetic code as two 64-symbol strings: the residue
//! encoded by every codon and a start marker (`M`) per codon, both in the
//! fixed `TCAG` order. This module decodes those strings into
//! [`GeneticCode`] values and collects them in a [`GeneticCodeRegistry`].
//!
//! ## Modules
//!
//! - [`table`]: Decoding of the encoded strings into a [`CodonTable`]
//! - [`registry`]: Catalog parsing and the cached default registry
//! - [`catalog`]: The built-in catalog
//!
//! ## Examples
//!
//! ```rust
//! use ncbikit_core::gencode::GeneticCodeRegistry;
//!
//! let registry = GeneticCodeRegistry::cached_default()?;
//! let bacterial = registry.require("11")?;
//!
//! assert_eq!(bacterial.translate(b"GTG"), Some(b'V'));
//! assert!(bacterial.is_start(b"GTG"));
//! # Ok::<(), ncbikit_core::types::NcbiError>(())
//! ```

pub mod catalog;
pub mod registry;
pub mod table;

pub use registry::GeneticCodeRegistry;
pub use table::{Codon, CodonTable, all_codons, codon_at, codon_index};

use crate::constants::STOP_SYMBOL;

/// One NCBI genetic code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    /// NCBI genetic code id ("1", "2", "11", ...)
    pub id: String,
    /// Short name, often blank
    pub abbreviation: String,
    /// Display name
    pub name: String,
    /// Decoded translation table
    pub table: CodonTable,
}

impl GeneticCode {
    /// Build a genetic code from its encoded strings.
    ///
    /// # Errors
    ///
    /// Returns [`NcbiError::MalformedTable`](crate::types::NcbiError::MalformedTable)
    /// when either string is shorter than 64 symbols.
    pub fn from_encoded(
        id: impl Into<String>,
        abbreviation: impl Into<String>,
        name: impl Into<String>,
        amino_acids: &[u8],
        start_markers: &[u8],
    ) -> Result<Self, crate::types::NcbiError> {
        Ok(Self {
            id: id.into(),
            abbreviation: abbreviation.into(),
            name: name.into(),
            table: CodonTable::build(amino_acids, start_markers)?,
        })
    }

    #[must_use]
    pub fn translate(&self, codon: &[u8]) -> Option<u8> {
        self.table.translate(codon)
    }

    #[must_use]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        self.table.is_start(codon)
    }

    #[must_use]
    pub fn is_four_fold(&self, codon: &[u8]) -> bool {
        self.table.is_four_fold(codon)
    }

    pub fn start_codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.table.start_codons()
    }

    /// Codons that terminate translation under this code.
    pub fn stop_codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.table
            .entries()
            .filter(|&(_, aa)| aa == STOP_SYMBOL)
            .map(|(codon, _)| codon)
    }
}
