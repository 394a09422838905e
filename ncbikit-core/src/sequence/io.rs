use crate::types::*;
use bio::io::fasta;
use std::fs::File;
use std::path::Path;

/// Sequence read from a FASTA file: (identifier, description, sequence)
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Identifier carried by an NCBI defline.
///
/// NCBI `.faa`/`.fna` deflines look like `gi|16127995|ref|NP_414542.1|`; the
/// second `|`-separated field is the key used by protein tables. Deflines
/// without a `|` are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::sequence::ncbi_identifier;
///
/// assert_eq!(ncbi_identifier("gi|16127995|ref|NP_414542.1|"), "16127995");
/// assert_eq!(ncbi_identifier("NP_414542.1"), "NP_414542.1");
/// ```
#[must_use]
pub fn ncbi_identifier(defline_id: &str) -> &str {
    defline_id.split('|').nth(1).unwrap_or(defline_id)
}

/// Read every record of a FASTA file using rust-bio, keyed by NCBI identifier.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, NcbiError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| NcbiError::Parse(e.to_string()))?;
        let id = ncbi_identifier(record.id()).to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}
