use std::io::Write;

use crate::types::{NcbiError, SeqRecord, strand_symbol};

/// Column names of the tabular output
pub const TSV_HEADER: [&str; 9] = [
    "id",
    "gene",
    "genome",
    "from",
    "to",
    "strand",
    "code",
    "nucleotide_length",
    "protein_length",
];

/// Write one tab-separated row per record after a header row
pub fn write_tsv_format<W: Write>(writer: &mut W, records: &[SeqRecord]) -> Result<(), NcbiError> {
    writeln!(writer, "{}", TSV_HEADER.join("\t"))?;
    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.id,
            record.name,
            record.genome,
            record.location.from,
            record.location.to,
            strand_symbol(record.location.strand),
            record.code,
            record.nucleotide.len(),
            record.protein.len()
        )?;
    }
    Ok(())
}
