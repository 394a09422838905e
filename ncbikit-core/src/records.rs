//! Reconcile protein sequences with their coding sequences.
//!
//! For one genome accession the pipeline reads the protein FASTA (`.faa`),
//! the genome FASTA (`.fna`) and the protein table (`.ptt`) from a directory,
//! cuts each protein's coding sequence out of the genome and keeps the pairs
//! whose codons translate to the protein.

use std::collections::HashMap;
use std::fmt;
use std::ops::AddAssign;
use std::path::Path;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::annotation::read_ptt_file;
use crate::gencode::{GeneticCode, GeneticCodeRegistry};
use crate::sequence::{FastaRecord, extract_coding_sequence, read_fasta_sequences};
use crate::types::{NcbiError, PttEntry, SeqRecord};
use crate::validation::{Verdict, check_codons};

/// Counts collected while reconciling one genome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Proteins read from the `.faa` file
    pub proteins: usize,
    /// Proteins without a protein table row
    pub unmatched: usize,
    /// Proteins whose location falls outside the genome
    pub out_of_range: usize,
    /// Proteins whose coding sequence failed codon validation
    pub rejected: usize,
    pub accepted: usize,
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} proteins: {} accepted, {} rejected, {} out of range, {} unmatched",
            self.proteins, self.accepted, self.rejected, self.out_of_range, self.unmatched
        )
    }
}

impl AddAssign for ReconcileSummary {
    fn add_assign(&mut self, other: Self) {
        self.proteins += other.proteins;
        self.unmatched += other.unmatched;
        self.out_of_range += other.out_of_range;
        self.rejected += other.rejected;
        self.accepted += other.accepted;
    }
}

enum Outcome {
    Unmatched,
    OutOfRange,
    Rejected,
    Accepted(SeqRecord),
}

/// Accession with any version suffix removed (`NC_000913.3` becomes `NC_000913`).
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::records::strip_version;
///
/// assert_eq!(strip_version("NC_000913.3"), "NC_000913");
/// assert_eq!(strip_version("NC_000913"), "NC_000913");
/// ```
#[must_use]
pub fn strip_version(accession: &str) -> &str {
    accession
        .split_once('.')
        .map_or(accession, |(base, _)| base)
}

/// Read and reconcile the records of one genome.
///
/// Looks for `<acc>.faa`, `<acc>.fna` and `<acc>.ptt` in `dir`, where `acc`
/// is `accession` without its version. The genome is the first `.fna`
/// record. Every protein is matched to its protein table row by PID; the
/// coding sequence is extracted and checked under `code_id`. Unmatched
/// proteins, out-of-range locations and rejected translations are skipped,
/// the last two with a warning. Records keep the order of the `.faa` file.
///
/// # Errors
///
/// Returns [`NcbiError::UnknownGeneticCode`] if `code_id` is not in
/// `registry`, [`NcbiError::Io`] if an input file is missing and
/// [`NcbiError::Parse`] for unreadable files or a genome FASTA without
/// records.
///
/// # Examples
///
/// ```rust,no_run
/// use ncbikit_core::gencode::GeneticCodeRegistry;
/// use ncbikit_core::records::read_seq_records;
///
/// let registry = GeneticCodeRegistry::cached_default()?;
/// let (records, summary) = read_seq_records("NC_000913.3", "genomes", "11", registry)?;
/// println!("{} of {} proteins kept", records.len(), summary.proteins);
/// # Ok::<(), ncbikit_core::types::NcbiError>(())
/// ```
pub fn read_seq_records<P: AsRef<Path>>(
    accession: &str,
    dir: P,
    code_id: &str,
    registry: &GeneticCodeRegistry,
) -> Result<(Vec<SeqRecord>, ReconcileSummary), NcbiError> {
    let code = registry.require(code_id)?;
    let acc = strip_version(accession);
    let dir = dir.as_ref();

    let proteins = read_fasta_sequences(dir.join(format!("{acc}.faa")))?;
    let genome = read_fasta_sequences(dir.join(format!("{acc}.fna")))?
        .into_iter()
        .next()
        .map(|(_, _, seq)| seq)
        .ok_or_else(|| NcbiError::Parse(format!("{acc}.fna contains no sequence")))?;
    let entries = read_ptt_file(dir.join(format!("{acc}.ptt")))?;
    debug!(
        "{}: {} proteins, {} table rows, {} bp genome",
        acc,
        proteins.len(),
        entries.len(),
        genome.len()
    );

    let (records, summary) = reconcile(acc, &proteins, &genome, &entries, code);
    info!("{acc}: {summary}");
    Ok((records, summary))
}

/// Pair proteins with coding sequences already loaded in memory.
///
/// This is the part of [`read_seq_records`] that runs after the files are
/// read. Proteins are processed in parallel; the output keeps their order.
pub fn reconcile(
    genome_accession: &str,
    proteins: &[FastaRecord],
    genome: &[u8],
    entries: &[PttEntry],
    code: &GeneticCode,
) -> (Vec<SeqRecord>, ReconcileSummary) {
    let by_pid: HashMap<&str, &PttEntry> = entries
        .iter()
        .map(|entry| (entry.pid.as_str(), entry))
        .collect();

    let outcomes: Vec<Outcome> = proteins
        .par_iter()
        .map(|(id, _, protein)| {
            let Some(entry) = by_pid.get(id.as_str()) else {
                return Outcome::Unmatched;
            };
            let Some(nucleotide) = extract_coding_sequence(genome, &entry.location) else {
                warn!(
                    "{}: location {} is outside the {} bp genome",
                    id,
                    entry.location,
                    genome.len()
                );
                return Outcome::OutOfRange;
            };

            let record = SeqRecord {
                id: id.clone(),
                name: entry.gene.clone(),
                protein: protein.clone(),
                nucleotide,
                genome: genome_accession.to_string(),
                code: code.id.clone(),
                location: entry.location,
            };
            match check_codons(&record.nucleotide, &record.protein, code) {
                Verdict::Accepted => Outcome::Accepted(record),
                Verdict::Rejected(rejection) => {
                    warn!("{id}: {rejection}");
                    Outcome::Rejected
                }
            }
        })
        .collect();

    let mut summary = ReconcileSummary {
        proteins: proteins.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Outcome::Unmatched => summary.unmatched += 1,
            Outcome::OutOfRange => summary.out_of_range += 1,
            Outcome::Rejected => summary.rejected += 1,
            Outcome::Accepted(record) => {
                summary.accepted += 1;
                records.push(record);
            }
        }
    }
    (records, summary)
}

/// Stable sort of records by genome accession.
pub fn sort_by_genome(records: &mut [SeqRecord]) {
    records.sort_by(|a, b| a.genome.cmp(&b.genome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio::bio_types::strand::Strand;
    use std::fs;
    use tempfile::TempDir;

    use crate::types::{Location, parse_strand};

    // 1..9 forward ATG AAA TAA, 13..21 reverse of ATG CCC TAA, 22..30 forward ATG AAA TAA
    const GENOME: &str = "ATGAAATAACCCTTAGGGCATATGAAATAAGGG";

    const FAA: &str = "\
>gi|101|ref|YP_0001.1| first
MK
>gi|102|ref|YP_0002.1| second
MP
>gi|103|ref|YP_0003.1| wrong translation
MQ
>gi|104|ref|YP_0004.1| past the end
MKK
>gi|105|ref|YP_0005.1| not in the table
MA
";

    const PTT: &str = "\
Test genome, complete sequence - 1..33
4 proteins
Location\tStrand\tLength\tPID\tGene\tSynonym\tCode\tCOG\tProduct
1..9\t+\t2\t101\tgenA\tT0001\t-\t-\tfirst
13..21\t-\t2\t102\tgenB\tT0002\t-\t-\tsecond
22..30\t+\t2\t103\tgenC\tT0003\t-\t-\twrong translation
30..40\t+\t3\t104\tgenD\tT0004\t-\t-\tpast the end
";

    fn genome_dir(acc: &str, fna: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(format!("{acc}.faa")), FAA).unwrap();
        fs::write(dir.path().join(format!("{acc}.fna")), fna).unwrap();
        fs::write(dir.path().join(format!("{acc}.ptt")), PTT).unwrap();
        dir
    }

    fn registry() -> &'static GeneticCodeRegistry {
        GeneticCodeRegistry::cached_default().unwrap()
    }

    #[test]
    fn test_strip_version() {
        assert_eq!(strip_version("NC_000913.3"), "NC_000913");
        assert_eq!(strip_version("NC_000913"), "NC_000913");
        assert_eq!(strip_version("A.1.2"), "A");
    }

    #[test]
    fn test_read_seq_records_end_to_end() {
        let dir = genome_dir("NC_TEST", &format!(">gi|1|ref|NC_TEST.1| genome\n{GENOME}\n"));
        let (records, summary) =
            read_seq_records("NC_TEST.1", dir.path(), "11", registry()).unwrap();

        assert_eq!(
            summary,
            ReconcileSummary {
                proteins: 5,
                unmatched: 1,
                out_of_range: 1,
                rejected: 1,
                accepted: 2,
            }
        );
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["101", "102"]);

        let first = &records[0];
        assert_eq!(first.name, "genA");
        assert_eq!(first.genome, "NC_TEST");
        assert_eq!(first.code, "11");
        assert_eq!(first.protein, b"MK");
        assert_eq!(first.nucleotide, b"ATGAAATAA");

        let second = &records[1];
        assert_eq!(second.location, Location::new(13, 21, Strand::Reverse));
        assert_eq!(second.nucleotide, b"ATGCCCTAA");
    }

    #[test]
    fn test_read_seq_records_unknown_code() {
        let dir = TempDir::new().unwrap();
        match read_seq_records("NC_TEST", dir.path(), "99", registry()) {
            Err(NcbiError::UnknownGeneticCode(id)) => assert_eq!(id, "99"),
            other => panic!("Expected UnknownGeneticCode, got {:?}", other),
        }
    }

    #[test]
    fn test_read_seq_records_missing_files() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_seq_records("NC_TEST", dir.path(), "11", registry()),
            Err(NcbiError::Io(_))
        ));
    }

    #[test]
    fn test_read_seq_records_empty_genome() {
        let dir = genome_dir("NC_EMPTY", "");
        match read_seq_records("NC_EMPTY", dir.path(), "11", registry()) {
            Err(NcbiError::Parse(msg)) => assert!(msg.contains("NC_EMPTY.fna"), "{}", msg),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_reads_unknown_strand_forward() {
        let code = registry().require("11").unwrap();
        let entries = vec![PttEntry {
            location: Location::new(22, 30, parse_strand("?").unwrap()),
            length: 2,
            pid: "201".to_string(),
            gene: "genU".to_string(),
            synonym: String::new(),
            code: "-".to_string(),
            cog: "-".to_string(),
            product: String::new(),
        }];
        let proteins: Vec<FastaRecord> = vec![("201".to_string(), None, b"MK".to_vec())];

        let (records, summary) = reconcile("G", &proteins, GENOME.as_bytes(), &entries, code);
        assert_eq!(summary.accepted, 1);
        assert_eq!(records[0].nucleotide, b"ATGAAATAA");
        assert!(matches!(records[0].location.strand, Strand::Unknown));
        assert_eq!((records[0].location.from, records[0].location.to), (22, 30));
    }

    #[test]
    fn test_reconcile_preserves_input_order() {
        let code = registry().require("11").unwrap();
        let genome = GENOME.as_bytes();
        let entries: Vec<PttEntry> = (0..50)
            .map(|i| PttEntry {
                location: Location::new(1, 9, Strand::Forward),
                length: 2,
                pid: format!("p{i}"),
                gene: format!("g{i}"),
                synonym: String::new(),
                code: "-".to_string(),
                cog: "-".to_string(),
                product: String::new(),
            })
            .collect();
        let proteins: Vec<FastaRecord> = (0..50)
            .rev()
            .map(|i| (format!("p{i}"), None, b"MK".to_vec()))
            .collect();

        let (records, summary) = reconcile("G", &proteins, genome, &entries, code);
        assert_eq!(summary.accepted, 50);
        let expected: Vec<String> = (0..50).rev().map(|i| format!("p{i}")).collect();
        let ids: Vec<String> = records.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_summary_accumulates() {
        let one = ReconcileSummary {
            proteins: 5,
            unmatched: 1,
            out_of_range: 1,
            rejected: 1,
            accepted: 2,
        };
        let mut total = ReconcileSummary::default();
        total += one;
        total += one;
        assert_eq!(total.proteins, 10);
        assert_eq!(total.accepted, 4);
        assert_eq!(
            total.to_string(),
            "10 proteins: 4 accepted, 2 rejected, 2 out of range, 2 unmatched"
        );
    }

    #[test]
    fn test_sort_by_genome_is_stable() {
        let record = |id: &str, genome: &str| SeqRecord {
            id: id.to_string(),
            name: String::new(),
            protein: Vec::new(),
            nucleotide: Vec::new(),
            genome: genome.to_string(),
            code: "11".to_string(),
            location: Location::new(1, 3, Strand::Forward),
        };
        let mut records = vec![
            record("1", "NC_B"),
            record("2", "NC_A"),
            record("3", "NC_B"),
            record("4", "NC_A"),
        ];
        sort_by_genome(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "4", "1", "3"]);
    }
}
