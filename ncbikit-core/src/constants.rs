// =============================================================================
// GENETIC CODE TABLES
// =============================================================================

/// Nucleotide order used by NCBI encoded translation tables.
///
/// The 64-symbol strings are positional: codon `i*16 + j*4 + k` is built from
/// `NUCLEOTIDE_ORDER[i]`, `NUCLEOTIDE_ORDER[j]`, `NUCLEOTIDE_ORDER[k]`.
/// Any other order silently scrambles every table.
pub const NUCLEOTIDE_ORDER: [u8; 4] = *b"TCAG";

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of codons in a translation table
pub const CODON_COUNT: usize = 64;

/// Marker for a permissible start codon in the encoded start string
pub const START_MARKER: u8 = b'M';

/// Residue symbol for translation stop
pub const STOP_SYMBOL: u8 = b'*';

/// Genetic code used when none is given (bacteria, archaea, plastids)
pub const DEFAULT_GENETIC_CODE: &str = "11";

// =============================================================================
// FLAT FILE FORMATS
// =============================================================================

/// Field separator in NCBI taxonomy dumps and the genetic code catalog
pub const DUMP_FIELD_SEPARATOR: &str = "\t|\t";

/// Terminator at the end of each dump row
pub const DUMP_ROW_TERMINATOR: &str = "\t|";

/// Number of fields in a genetic code catalog row
pub const CATALOG_FIELD_COUNT: usize = 5;

/// Minimum number of fields in a `nodes.dmp` row
pub const NODES_FIELD_COUNT: usize = 13;

/// Minimum number of fields in a `names.dmp` row
pub const NAMES_FIELD_COUNT: usize = 4;

/// Name class kept from `names.dmp`
pub const SCIENTIFIC_NAME_CLASS: &str = "scientific name";

/// Header lines preceding the rows of a `.ptt` file
pub const PTT_HEADER_LINES: usize = 3;

/// Number of tab-separated columns in a `.ptt` row
pub const PTT_FIELD_COUNT: usize = 9;

/// Byte produced when complementing a symbol outside `ACGTacgt`
pub const UNKNOWN_COMPLEMENT: u8 = 0;
