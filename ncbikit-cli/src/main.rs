//! # ncbikit CLI - Codon-Validated Gene Records
//!
//! Command-line front end for reconciling NCBI genome annotations with the
//! genetic code tables.
//!
//! ## Usage
//!
//! ```bash
//! # Records of one genome as TSV
//! ncbikit -d genomes -a NC_000913.3
//!
//! # Coding sequences of several genomes as FASTA
//! ncbikit -d genomes -a NC_000913 -a NC_002695 -f fna -o cds.fna
//!
//! # Mycoplasma genome under genetic code 4
//! ncbikit -d genomes -a NC_000908 -g 4 -f faa
//!
//! # Known genetic codes with their start codons
//! ncbikit --list-codes
//! ```
//!
//! ## Options
//!
//! - `-d, --dir <DIR>`: Directory holding `<acc>.faa`, `<acc>.fna` and `<acc>.ptt`
//! - `-a, --accession <ACC>`: Genome accession, repeatable
//! - `-g, --genetic-code <ID>`: Genetic code id (default: 11)
//! - `--gencode <FILE>`: Genetic code catalog in `gencode.dmp` layout
//! - `-f, --format <FORMAT>`: Output format: fna, faa, tsv (default: tsv)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-j, --threads <N>`: Worker threads (default: all cores)
//! - `-L, --level <LEVEL>`: Log level (default: info)
//! - `-q, --quiet`: Only log warnings and errors
//! - `--list-codes`: Print the known genetic codes and exit

use clap::{Arg, ArgAction, Command, value_parser};
use log::{Level, info};
use ncbikit_core::config::{NcbiConfig, OutputFormat};
use ncbikit_core::constants::DEFAULT_GENETIC_CODE;
use ncbikit_core::output::write_records;
use ncbikit_core::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("ncbikit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pair NCBI proteins with their codon-validated coding sequences")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("list-codes")
                .help("Directory with <acc>.faa, <acc>.fna and <acc>.ptt files"),
        )
        .arg(
            Arg::new("accession")
                .short('a')
                .long("accession")
                .value_name("ACC")
                .action(ArgAction::Append)
                .required_unless_present("list-codes")
                .help("Genome accession, version suffix optional (repeatable)"),
        )
        .arg(
            Arg::new("genetic-code")
                .short('g')
                .long("genetic-code")
                .value_name("ID")
                .default_value(DEFAULT_GENETIC_CODE)
                .help("NCBI genetic code id"),
        )
        .arg(
            Arg::new("gencode")
                .long("gencode")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Genetic code catalog in gencode.dmp layout (default: built-in)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(OutputFormat::NAMES)
                .default_value("tsv")
                .help("Output format: fna, faa, tsv"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("level")
                .short('L')
                .long("level")
                .value_name("LEVEL")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("info")
                .help("Logging verbosity level"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
        .arg(
            Arg::new("list-codes")
                .long("list-codes")
                .action(ArgAction::SetTrue)
                .help("Print the known genetic codes and exit"),
        )
}

/// Main entry point for the ncbikit CLI application.
///
/// Parses command-line arguments, loads the genetic code registry,
/// reconciles each requested genome and writes the records in the
/// requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let config = NcbiConfig {
        genetic_code: matches
            .get_one::<String>("genetic-code")
            .cloned()
            .unwrap_or_else(|| DEFAULT_GENETIC_CODE.to_string()),
        gencode_catalog: matches.get_one::<PathBuf>("gencode").cloned(),
        output_format: matches
            .get_one::<String>("format")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default(),
        num_threads: matches.get_one::<usize>("threads").copied(),
        quiet: matches.get_flag("quiet"),
    };

    let level_name = matches
        .get_one::<String>("level")
        .map_or("info", String::as_str);
    let mut level: Level = level_name
        .parse()
        .map_err(|_| format!("Invalid log level {level_name:?}"))?;
    if config.quiet {
        level = level.min(Level::Warn);
    }
    simple_logger::init_with_level(level)?;

    if let Some(num_threads) = config.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    let loaded;
    let registry = match &config.gencode_catalog {
        Some(path) => {
            info!("Loading genetic codes from {}", path.display());
            loaded = GeneticCodeRegistry::from_path(path)?;
            &loaded
        }
        None => GeneticCodeRegistry::cached_default()?,
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if matches.get_flag("list-codes") {
        write_code_list(&mut writer, registry)?;
        writer.flush()?;
        return Ok(());
    }

    let code = registry.require(&config.genetic_code)?;
    info!("Using genetic code {} ({})", code.id, code.name);

    let dir = matches
        .get_one::<PathBuf>("dir")
        .ok_or("Missing --dir")?;
    let mut records = Vec::new();
    let mut total = ReconcileSummary::default();
    for accession in matches.get_many::<String>("accession").into_iter().flatten() {
        let (genome_records, summary) =
            read_seq_records(accession, dir, &config.genetic_code, registry)?;
        records.extend(genome_records);
        total += summary;
    }
    sort_by_genome(&mut records);

    write_records(&mut writer, &records, config.output_format)?;
    writer.flush()?;

    info!("Done! {total}");
    Ok(())
}

/// One line per genetic code: id, name and start codons.
fn write_code_list<W: Write>(
    writer: &mut W,
    registry: &GeneticCodeRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    for code in registry.codes() {
        let starts: Vec<String> = code
            .start_codons()
            .map(|codon| String::from_utf8_lossy(&codon).into_owned())
            .collect();
        writeln!(writer, "{}\t{}\t{}", code.id, code.name, starts.join(","))?;
    }
    Ok(())
}
