use std::fmt;

use bio::bio_types::strand::Strand;
use thiserror::Error;

/// Parse an annotation strand symbol.
///
/// NCBI tables use `+` and `-`; `.` and `?` are accepted as
/// [`Strand::Unknown`] so that sparse annotation rows still load.
///
/// # Examples
///
/// ```rust
/// use bio::bio_types::strand::Strand;
/// use ncbikit_core::types::parse_strand;
///
/// assert_eq!(parse_strand("+").unwrap(), Strand::Forward);
/// assert_eq!(parse_strand("-").unwrap(), Strand::Reverse);
/// assert!(parse_strand("x").is_err());
/// ```
pub fn parse_strand(symbol: &str) -> Result<Strand, NcbiError> {
    match symbol.trim() {
        "+" => Ok(Strand::Forward),
        "-" => Ok(Strand::Reverse),
        "." | "?" => Ok(Strand::Unknown),
        other => Err(NcbiError::InvalidStrand(other.to_string())),
    }
}

/// Symbol used when writing a strand back out.
#[must_use]
pub const fn strand_symbol(strand: Strand) -> char {
    match strand {
        Strand::Forward => '+',
        Strand::Reverse => '-',
        Strand::Unknown => '.',
    }
}

/// Genomic location of an annotated gene.
///
/// Coordinates are 1-based and inclusive. A `to` smaller than `from`
/// marks a gene crossing the origin of a circular genome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// First base (1-based)
    pub from: usize,
    /// Last base (1-based, inclusive)
    pub to: usize,
    /// Strand the gene is read from
    pub strand: Strand,
}

impl Location {
    #[must_use]
    pub const fn new(from: usize, to: usize, strand: Strand) -> Self {
        Self { from, to, strand }
    }

    /// Whether the gene spans the origin of a circular genome.
    #[must_use]
    pub const fn is_wraparound(&self) -> bool {
        self.to < self.from
    }

    /// Check both coordinates against a genome of `genome_length` bases.
    ///
    /// Extraction must only be attempted when this returns `true`.
    #[must_use]
    pub const fn is_within(&self, genome_length: usize) -> bool {
        self.from > 0 && self.to > 0 && self.from <= genome_length && self.to <= genome_length
    }

    /// Number of bases covered on a genome of `genome_length` bases.
    #[must_use]
    pub const fn span(&self, genome_length: usize) -> usize {
        if self.is_wraparound() {
            genome_length - self.from + 1 + self.to
        } else {
            self.to - self.from + 1
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}({})",
            self.from,
            self.to,
            strand_symbol(self.strand)
        )
    }
}

/// A protein paired with the coding sequence it was translated from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    /// Protein identifier (GI number in NCBI tables)
    pub id: String,
    /// Gene name
    pub name: String,
    /// Protein sequence
    pub protein: Vec<u8>,
    /// Coding sequence, 5' to 3'
    pub nucleotide: Vec<u8>,
    /// Genome accession without version suffix
    pub genome: String,
    /// Genetic code id used for validation
    pub code: String,
    /// Location on the genome
    pub location: Location,
}

/// One row of an NCBI protein table (`.ptt`).
#[derive(Debug, Clone, PartialEq)]
pub struct PttEntry {
    pub location: Location,
    /// Protein length in residues
    pub length: usize,
    /// Protein identifier
    pub pid: String,
    pub gene: String,
    /// Locus tag
    pub synonym: String,
    /// Single-letter functional category code
    pub code: String,
    /// COG identifier
    pub cog: String,
    pub product: String,
}

/// Errors raised while loading tables, catalogs and annotation files.
#[derive(Error, Debug)]
pub enum NcbiError {
    /// Encoded amino-acid or start-marker string has the wrong length
    #[error("Malformed {which} table: expected {expected} symbols, found {found}")]
    MalformedTable {
        which: &'static str,
        expected: usize,
        found: usize,
    },
    /// Genetic code catalog line could not be parsed
    #[error("Malformed genetic code catalog at line {line}: {reason}")]
    MalformedCatalog { line: usize, reason: String },
    /// Genetic code id not present in the registry
    #[error("Unknown genetic code: {0}")]
    UnknownGeneticCode(String),
    /// Taxonomy dump row could not be parsed
    #[error("Malformed taxonomy dump {file} at line {line}: {reason}")]
    MalformedDump {
        file: String,
        line: usize,
        reason: String,
    },
    /// Error parsing input data
    #[error("Parse error: {0}")]
    Parse(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Strand symbol other than `+`, `-`, `.` or `?`
    #[error("Invalid strand: {0:?}")]
    InvalidStrand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strand_symbols() {
        assert_eq!(parse_strand("+").unwrap(), Strand::Forward);
        assert_eq!(parse_strand(" - ").unwrap(), Strand::Reverse);
        assert!(matches!(parse_strand(".").unwrap(), Strand::Unknown));
        assert!(matches!(parse_strand("?").unwrap(), Strand::Unknown));
        match parse_strand("plus") {
            Err(NcbiError::InvalidStrand(s)) => assert_eq!(s, "plus"),
            other => panic!("Expected InvalidStrand, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_strand_location() {
        let loc = Location::new(1, 9, parse_strand(".").unwrap());
        assert!(matches!(loc.strand, Strand::Unknown));
        assert_eq!(loc.to_string(), "1..9(.)");
        // bio's Strand::Unknown never compares equal, not even to itself
        assert_ne!(loc, loc);
    }

    #[test]
    fn test_location_bounds() {
        let loc = Location::new(5, 10, Strand::Forward);
        assert!(loc.is_within(10));
        assert!(!loc.is_within(9));
        assert!(!Location::new(0, 10, Strand::Forward).is_within(100));
        assert!(!Location::new(5, 0, Strand::Forward).is_within(100));
    }

    #[test]
    fn test_location_span() {
        assert_eq!(Location::new(5, 10, Strand::Forward).span(20), 6);

        let wrap = Location::new(18, 3, Strand::Reverse);
        assert!(wrap.is_wraparound());
        assert_eq!(wrap.span(20), 3 + 3);
    }

    #[test]
    fn test_location_display() {
        let loc = Location::new(190, 255, Strand::Reverse);
        assert_eq!(loc.to_string(), "190..255(-)");
    }

    #[test]
    fn test_error_messages() {
        let err = NcbiError::MalformedTable {
            which: "amino acid",
            expected: 64,
            found: 12,
        };
        assert_eq!(
            err.to_string(),
            "Malformed amino acid table: expected 64 symbols, found 12"
        );
        assert_eq!(
            NcbiError::UnknownGeneticCode("99".to_string()).to_string(),
            "Unknown genetic code: 99"
        );
    }
}
