use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::{PTT_FIELD_COUNT, PTT_HEADER_LINES};
use crate::types::{Location, NcbiError, PttEntry, parse_strand};

/// Read an NCBI protein table.
///
/// The first three lines (title, protein count and column header) are
/// skipped. Each remaining row holds `Location`, `Strand`, `Length`, `PID`,
/// `Gene`, `Synonym`, `Code`, `COG` and `Product` separated by tabs.
///
/// # Errors
///
/// Returns [`NcbiError::Parse`] with the 1-based line number for rows with
/// missing columns or unreadable coordinates, and [`NcbiError::Io`] on read
/// failures.
pub fn read_ptt<R: BufRead>(reader: R) -> Result<Vec<PttEntry>, NcbiError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(PTT_HEADER_LINES) {
        let line = line?;
        let row = line.trim_end_matches(['\r', '\n']);
        if row.trim().is_empty() {
            continue;
        }
        let entry = parse_ptt_row(row).map_err(|reason| {
            NcbiError::Parse(format!("protein table line {}: {}", index + 1, reason))
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Read a `.ptt` file from disk.
///
/// # Errors
///
/// See [`read_ptt`].
pub fn read_ptt_file<P: AsRef<Path>>(path: P) -> Result<Vec<PttEntry>, NcbiError> {
    let file = File::open(path)?;
    read_ptt(BufReader::new(file))
}

fn parse_ptt_row(row: &str) -> Result<PttEntry, String> {
    let fields: Vec<&str> = row.splitn(PTT_FIELD_COUNT, '\t').collect();
    if fields.len() < PTT_FIELD_COUNT {
        return Err(format!(
            "expected {} columns, found {}",
            PTT_FIELD_COUNT,
            fields.len()
        ));
    }

    let (from, to) = fields[0]
        .split_once("..")
        .ok_or_else(|| format!("location {:?} is not a from..to range", fields[0]))?;
    let from = parse_coordinate(from)?;
    let to = parse_coordinate(to)?;
    let strand = parse_strand(fields[1]).map_err(|e| e.to_string())?;
    let length = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid protein length {:?}", fields[2]))?;

    Ok(PttEntry {
        location: Location::new(from, to, strand),
        length,
        pid: fields[3].trim().to_string(),
        gene: fields[4].trim().to_string(),
        synonym: fields[5].trim().to_string(),
        code: fields[6].trim().to_string(),
        cog: fields[7].trim().to_string(),
        product: fields[8].trim().to_string(),
    })
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid coordinate {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio::bio_types::strand::Strand;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const HEADER: &str = "Escherichia coli str. K-12 substr. MG1655 chromosome, complete genome - 1..4641652\n4140 proteins\nLocation\tStrand\tLength\tPID\tGene\tSynonym\tCode\tCOG\tProduct\n";

    fn table(rows: &str) -> String {
        format!("{}{}", HEADER, rows)
    }

    #[test]
    fn test_read_ptt_rows() {
        let content = table(
            "190..255\t+\t21\t16127995\tthrL\tb0001\t-\t-\tthr operon leader peptide\n\
             5683..6459\t-\t258\t16128001\tyaaA\tb0006\tS\tCOG3022S\tconserved protein, UPF0246 family\n",
        );
        let entries = read_ptt(Cursor::new(content)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            PttEntry {
                location: Location::new(190, 255, Strand::Forward),
                length: 21,
                pid: "16127995".to_string(),
                gene: "thrL".to_string(),
                synonym: "b0001".to_string(),
                code: "-".to_string(),
                cog: "-".to_string(),
                product: "thr operon leader peptide".to_string(),
            }
        );
        assert_eq!(entries[1].location.strand, Strand::Reverse);
        assert_eq!(entries[1].cog, "COG3022S");
        assert_eq!(entries[1].product, "conserved protein, UPF0246 family");
    }

    #[test]
    fn test_read_ptt_wraparound_location() {
        let content = table("4641500..120\t+\t214\t99\tcirc\tb9999\t-\t-\torigin spanning\n");
        let entries = read_ptt(Cursor::new(content)).unwrap();
        assert!(entries[0].location.is_wraparound());
    }

    #[test]
    fn test_read_ptt_skips_header_and_blank_lines() {
        let content = table("\n190..255\t+\t21\t16127995\tthrL\tb0001\t-\t-\tthr\r\n\n");
        let entries = read_ptt(Cursor::new(content)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product, "thr");
    }

    #[test]
    fn test_read_ptt_header_only() {
        let entries = read_ptt(Cursor::new(HEADER)).unwrap();
        assert!(entries.is_empty());
        assert!(read_ptt(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_ptt_rejects_short_rows() {
        let content = table("190..255\t+\t21\t16127995\n");
        match read_ptt(Cursor::new(content)) {
            Err(NcbiError::Parse(msg)) => {
                assert!(msg.contains("line 4"), "{}", msg);
                assert!(msg.contains("expected 9 columns, found 4"), "{}", msg);
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_ptt_rejects_bad_coordinates() {
        for location in ["190-255", "abc..255", "190..", "-5..10"] {
            let content = table(&format!("{}\t+\t21\t1\tg\ts\t-\t-\tp\n", location));
            assert!(
                matches!(read_ptt(Cursor::new(content)), Err(NcbiError::Parse(_))),
                "location {:?} should be rejected",
                location
            );
        }
    }

    #[test]
    fn test_read_ptt_rejects_bad_strand() {
        let content = table("190..255\t21\t+\t1\tg\ts\t-\t-\tp\n");
        match read_ptt(Cursor::new(content)) {
            Err(NcbiError::Parse(msg)) => assert!(msg.contains("Invalid strand"), "{}", msg),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_ptt_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(table("190..255\t+\t21\t16127995\tthrL\tb0001\t-\t-\tthr\n").as_bytes())
            .unwrap();
        let entries = read_ptt_file(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(matches!(
            read_ptt_file("missing.ptt"),
            Err(NcbiError::Io(_))
        ));
    }
}
