//! Nucleotide sequence utilities.
//!
//! ## Modules
//!
//! - [`extract`]: Coding sequence extraction from a genome by [`Location`](crate::types::Location)
//! - [`io`]: FASTA reading with NCBI defline handling
//!
//! ## Examples
//!
//! ```rust
//! use ncbikit_core::sequence::reverse_complement;
//!
//! assert_eq!(reverse_complement(b"ATGC"), b"GCAT".to_vec());
//! ```

pub mod extract;
pub mod io;

pub use extract::extract_coding_sequence;
pub use io::*;

use crate::constants::UNKNOWN_COMPLEMENT;

/// Complement a single base.
///
/// Upper- and lower-case `ACGT` map to the upper-case complement. Every other
/// symbol, including IUPAC ambiguity codes, maps to
/// [`UNKNOWN_COMPLEMENT`] so that the resulting codon never matches a table
/// entry.
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::sequence::complement;
///
/// assert_eq!(complement(b'A'), b'T');
/// assert_eq!(complement(b'g'), b'C');
/// assert_eq!(complement(b'N'), 0);
/// ```
#[must_use]
pub const fn complement(base: u8) -> u8 {
    match base {
        b'A' | b'a' => b'T',
        b'T' | b't' => b'A',
        b'G' | b'g' => b'C',
        b'C' | b'c' => b'G',
        _ => UNKNOWN_COMPLEMENT,
    }
}

/// Reverse complement of `sequence` as a new buffer.
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}
