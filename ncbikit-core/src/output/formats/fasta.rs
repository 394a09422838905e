use std::io::Write;

use bio::io::fasta;

use crate::types::{NcbiError, SeqRecord};

/// Description written after the record id, shared by both FASTA outputs.
fn describe(record: &SeqRecord) -> String {
    format!(
        "gene={} loc={} code={}",
        record.name, record.location, record.code
    )
}

fn write_fasta<W, F>(writer: &mut W, records: &[SeqRecord], sequence: F) -> Result<(), NcbiError>
where
    W: Write,
    F: Fn(&SeqRecord) -> &[u8],
{
    let mut fasta_writer = fasta::Writer::new(writer);
    for record in records {
        let description = describe(record);
        fasta_writer.write(&record.id, Some(description.as_str()), sequence(record))?;
    }
    fasta_writer.flush()?;
    Ok(())
}

/// Write coding sequences as nucleotide FASTA
pub fn write_fna_format<W: Write>(writer: &mut W, records: &[SeqRecord]) -> Result<(), NcbiError> {
    write_fasta(writer, records, |record| record.nucleotide.as_slice())
}

/// Write proteins as amino-acid FASTA
pub fn write_faa_format<W: Write>(writer: &mut W, records: &[SeqRecord]) -> Result<(), NcbiError> {
    write_fasta(writer, records, |record| record.protein.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use bio::bio_types::strand::Strand;

    fn record() -> SeqRecord {
        SeqRecord {
            id: "16127995".to_string(),
            name: "thrL".to_string(),
            protein: b"MK".to_vec(),
            nucleotide: b"ATGAAATAA".to_vec(),
            genome: "NC_000913".to_string(),
            code: "11".to_string(),
            location: Location::new(190, 198, Strand::Forward),
        }
    }

    #[test]
    fn test_write_fna_format() {
        let mut buffer = Vec::new();
        write_fna_format(&mut buffer, &[record()]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">16127995 gene=thrL loc=190..198(+) code=11\nATGAAATAA\n"
        );
    }

    #[test]
    fn test_write_faa_format_reverse_strand() {
        let mut reverse = record();
        reverse.location = Location::new(5683, 6459, Strand::Reverse);
        let mut buffer = Vec::new();
        write_faa_format(&mut buffer, &[record(), reverse]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">16127995 gene=thrL loc=190..198(+) code=11\nMK\n\
             >16127995 gene=thrL loc=5683..6459(-) code=11\nMK\n"
        );
    }

    #[test]
    fn test_write_fasta_empty() {
        let mut buffer = Vec::new();
        write_fna_format(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
