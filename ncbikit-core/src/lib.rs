//! # ncbikit - NCBI genetic codes and gene records
//!
//! Decodes the NCBI genetic code tables and uses them to pair annotated
//! proteins with the coding sequences they were translated from.
//!
//! ## Overview
//!
//! NCBI publishes each genetic code as two 64-character strings: the amino
//! acid encoded by every codon and a marker for the codons that may start
//! translation. Codons are listed in `TCAG` order. This crate turns those
//! strings into lookup tables, keeps every known code in a registry, and
//! checks that a coding sequence cut from a genome translates to the
//! protein it is annotated with.
//!
//! ## Features
//!
//! - **Genetic code registry**: built-in NCBI catalog or any `gencode.dmp`
//! - **Codon tables**: translation, start codons and four-fold degenerate sites
//! - **Coding sequence extraction**: both strands and origin-spanning genes
//! - **Codon validation**: start codon and per-residue translation checks
//! - **NCBI flat files**: protein tables (`.ptt`), FASTA and taxonomy dumps
//! - **Parallel Processing**: per-gene work runs on Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use ncbikit_core::GeneticCodeRegistry;
//! use ncbikit_core::validation::{Verdict, validate};
//!
//! let registry = GeneticCodeRegistry::cached_default()?;
//! let bacterial = registry.require("11")?;
//! assert_eq!(bacterial.translate(b"TTG"), Some(b'L'));
//! assert!(bacterial.is_start(b"TTG"));
//!
//! let verdict = validate(b"ATGAAATAA", b"MK", "11", registry)?;
//! assert_eq!(verdict, Verdict::Accepted);
//! # Ok::<(), ncbikit_core::types::NcbiError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`gencode`]: Codon tables and the genetic code registry
//! - [`sequence`]: Reverse complement, coding sequence extraction and FASTA input
//! - [`validation`]: Codon consistency checks
//! - [`annotation`]: NCBI protein table reader
//! - [`taxonomy`]: NCBI taxonomy dump reader
//! - [`records`]: Per-genome reconciliation pipeline
//! - [`output`]: FASTA and TSV writers
//! - [`config`]: Run configuration
//! - [`types`]: Shared data types and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, NcbiError>`](types::NcbiError).
//! A coding sequence that does not match its protein is not an error; it is
//! reported as a [`validation::Verdict::Rejected`].

pub mod annotation;
pub mod config;
pub mod constants;
mod dump;
pub mod gencode;
pub mod output;
pub mod records;
pub mod sequence;
pub mod taxonomy;
pub mod types;
pub mod validation;

pub use gencode::{GeneticCode, GeneticCodeRegistry};
pub use records::{ReconcileSummary, read_seq_records, sort_by_genome};
pub use types::{NcbiError, SeqRecord};
