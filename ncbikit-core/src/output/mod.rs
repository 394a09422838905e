//! Output formatting for reconciled records.
//!
//! ## Supported Formats
//!
//! - **FNA**: coding sequences as nucleotide FASTA
//! - **FAA**: proteins as amino-acid FASTA
//! - **TSV**: one tab-separated row of coordinates and lengths per record
//!
//! FASTA headers read `>id gene=<name> loc=<from>..<to>(<strand>) code=<id>`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use ncbikit_core::config::OutputFormat;
//! use ncbikit_core::gencode::GeneticCodeRegistry;
//! use ncbikit_core::output::write_records;
//! use ncbikit_core::records::read_seq_records;
//! use std::io::stdout;
//!
//! let registry = GeneticCodeRegistry::cached_default()?;
//! let (records, _) = read_seq_records("NC_000913.3", "genomes", "11", registry)?;
//! write_records(&mut stdout(), &records, OutputFormat::Fna)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{NcbiError, config::OutputFormat, types::SeqRecord};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod tsv;
}

pub use formats::tsv::TSV_HEADER;
use formats::{
    fasta::{write_faa_format, write_fna_format},
    tsv::write_tsv_format,
};

/// Writes records in the specified format.
///
/// # Errors
///
/// Returns [`NcbiError::Io`] if writing fails.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[SeqRecord],
    format: OutputFormat,
) -> Result<(), NcbiError> {
    match format {
        OutputFormat::Fna => write_fna_format(writer, records),
        OutputFormat::Faa => write_faa_format(writer, records),
        OutputFormat::Tsv => write_tsv_format(writer, records),
    }
}
