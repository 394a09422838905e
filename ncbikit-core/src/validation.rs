//! Codon consistency between a coding sequence and its protein.
//!
//! A record is accepted when the nucleotide sequence is long enough to encode
//! the whole protein, opens with a start codon of its genetic code, and every
//! following codon translates to the residue at the same position. The first
//! codon is only checked against the start set: alternative starts such as
//! `GTG` encode valine in the table but initiate with methionine.
//!
//! ```rust
//! use ncbikit_core::gencode::GeneticCodeRegistry;
//! use ncbikit_core::validation::{Rejection, Verdict, validate};
//!
//! let registry = GeneticCodeRegistry::cached_default()?;
//!
//! assert_eq!(validate(b"ATGAAATAA", b"MK", "1", registry)?, Verdict::Accepted);
//! assert!(matches!(
//!     validate(b"ATGAAATAA", b"MQ", "1", registry)?,
//!     Verdict::Rejected(Rejection::CodonMismatch { position: 1, .. })
//! ));
//! # Ok::<(), ncbikit_core::types::NcbiError>(())
//! ```

use std::fmt;

use crate::constants::CODON_LENGTH;
use crate::gencode::{GeneticCode, GeneticCodeRegistry};
use crate::types::NcbiError;

/// Outcome of a codon consistency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Why a coding sequence does not match its protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer complete codons than residues
    LengthMismatch { codons: usize, residues: usize },
    /// Sequence too short to hold even the start codon
    MissingStartCodon { length: usize },
    /// First codon is not a start codon of the genetic code
    InvalidStartCodon { codon: Vec<u8>, code: String },
    /// Codon at `position` does not encode the protein residue there
    CodonMismatch {
        position: usize,
        codon: Vec<u8>,
        expected: u8,
        found: Option<u8>,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { codons, residues } => write!(
                f,
                "nucleotide sequence has {} codons for a protein of {} residues",
                codons, residues
            ),
            Self::MissingStartCodon { length } => write!(
                f,
                "nucleotide sequence of {} bases has no start codon",
                length
            ),
            Self::InvalidStartCodon { codon, code } => write!(
                f,
                "first codon {} is not a start codon in table {}",
                codon.escape_ascii(),
                code
            ),
            Self::CodonMismatch {
                position,
                codon,
                expected,
                found,
            } => match found {
                Some(found) => write!(
                    f,
                    "codon {} at position {} encodes {} instead of {}",
                    codon.escape_ascii(),
                    position,
                    char::from(*found),
                    char::from(*expected)
                ),
                None => write!(
                    f,
                    "codon {} at position {} is ambiguous, expected {}",
                    codon.escape_ascii(),
                    position,
                    char::from(*expected)
                ),
            },
        }
    }
}

/// Check `nucleotide` against `protein` under an already resolved genetic code.
///
/// The check stops at the first failure. Trailing codons beyond the protein
/// (typically the stop codon) are not inspected.
#[must_use]
pub fn check_codons(nucleotide: &[u8], protein: &[u8], code: &GeneticCode) -> Verdict {
    let codons = nucleotide.len() / CODON_LENGTH;
    if codons < protein.len() {
        return Verdict::Rejected(Rejection::LengthMismatch {
            codons,
            residues: protein.len(),
        });
    }
    // The start codon has to be present even for an empty protein.
    if codons == 0 {
        return Verdict::Rejected(Rejection::MissingStartCodon {
            length: nucleotide.len(),
        });
    }

    let mut codon_iter = nucleotide.chunks_exact(CODON_LENGTH);

    if let Some(start) = codon_iter.next() {
        if !code.is_start(start) {
            return Verdict::Rejected(Rejection::InvalidStartCodon {
                codon: start.to_vec(),
                code: code.id.clone(),
            });
        }
    }

    for (offset, (codon, &expected)) in codon_iter.zip(protein.iter().skip(1)).enumerate() {
        let position = offset + 1;
        let found = code.translate(codon);
        if found != Some(expected) {
            return Verdict::Rejected(Rejection::CodonMismatch {
                position,
                codon: codon.to_vec(),
                expected,
                found,
            });
        }
    }

    Verdict::Accepted
}

/// Check `nucleotide` against `protein` under the genetic code `code_id`.
///
/// # Errors
///
/// Returns [`NcbiError::UnknownGeneticCode`] when `code_id` is not in
/// `registry`. A failed check is not an error: it is returned as
/// [`Verdict::Rejected`].
pub fn validate(
    nucleotide: &[u8],
    protein: &[u8],
    code_id: &str,
    registry: &GeneticCodeRegistry,
) -> Result<Verdict, NcbiError> {
    let code = registry.require(code_id)?;
    Ok(check_codons(nucleotide, protein, code))
}
