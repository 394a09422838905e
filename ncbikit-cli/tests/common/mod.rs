#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;

// 1..9 forward ATG AAA TAA, 13..21 reverse of ATG CCC TAA, 22..30 forward ATG AAA TAA
pub const GENOME: &str = "ATGAAATAACCCTTAGGGCATATGAAATAAGGG";

pub const FAA: &str = "\
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

pub const PTT: &str = "\
Test genome, complete sequence - 1..33
4 proteins
Location\tStrand\tLength\tPID\tGene\tSynonym\tCode\tCOG\tProduct
1..9\t+\t2\t101\tgenA\tT0001\t-\t-\tfirst
13..21\t-\t2\t102\tgenB\tT0002\t-\t-\tsecond
22..30\t+\t2\t103\tgenC\tT0003\t-\t-\twrong translation
30..40\t+\t3\t104\tgenD\tT0004\t-\t-\tpast the end
";

/// Writes `<acc>.faa`, `<acc>.fna` and `<acc>.ptt` for the small test genome
pub fn write_genome(dir: &Path, accession: &str) {
    fs::write(dir.join(format!("{accession}.faa")), FAA).unwrap();
    fs::write(
        dir.join(format!("{accession}.fna")),
        format!(">gi|1|ref|{accession}.1| test genome\n{GENOME}\n"),
    )
    .unwrap();
    fs::write(dir.join(format!("{accession}.ptt")), PTT).unwrap();
}

pub fn ncbikit() -> Command {
    Command::cargo_bin("ncbikit").unwrap()
}

/// Runs the ncbikit CLI with given arguments and returns its stdout
pub fn run_ncbikit(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = ncbikit().args(args).assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}
