use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::DEFAULT_GENETIC_CODE;
use crate::types::NcbiError;

/// Output format for reconciled records.
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::config::OutputFormat;
///
/// let format: OutputFormat = "faa".parse()?;
/// assert_eq!(format, OutputFormat::Faa);
/// assert_eq!(format.to_string(), "faa");
/// # Ok::<(), ncbikit_core::types::NcbiError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Coding sequences as nucleotide FASTA.
    Fna,

    /// Protein sequences as amino-acid FASTA.
    Faa,

    /// Tab-separated table of ids, coordinates and lengths.
    ///
    /// One header row followed by one row per record.
    #[default]
    Tsv,
}

impl OutputFormat {
    /// Names accepted by [`FromStr`]
    pub const NAMES: [&'static str; 3] = ["fna", "faa", "tsv"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fna => "fna",
            Self::Faa => "faa",
            Self::Tsv => "tsv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = NcbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fna" => Ok(Self::Fna),
            "faa" => Ok(Self::Faa),
            "tsv" => Ok(Self::Tsv),
            other => Err(NcbiError::Parse(format!("unknown output format {other:?}"))),
        }
    }
}

/// Settings for a reconciliation run.
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::config::{NcbiConfig, OutputFormat};
///
/// let config = NcbiConfig {
///     genetic_code: "4".to_string(),
///     output_format: OutputFormat::Fna,
///     num_threads: Some(8),
///     ..Default::default()
/// };
/// assert!(!config.quiet);
/// ```
#[derive(Debug, Clone)]
pub struct NcbiConfig {
    /// Genetic code id used to validate every record.
    ///
    /// - `11`: Bacterial, Archaeal and Plant Plastid
    /// - `4`: Mycoplasma/Spiroplasma
    /// - Others: see the NCBI genetic code tables
    ///
    /// **Default**: `"11"`
    pub genetic_code: String,

    /// Catalog file in `gencode.dmp` layout replacing the built-in tables.
    ///
    /// **Default**: `None`
    pub gencode_catalog: Option<PathBuf>,

    /// **Default**: [`OutputFormat::Tsv`]
    pub output_format: OutputFormat,

    /// Number of threads for per-gene extraction and validation.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,

    /// Only report warnings and errors.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for NcbiConfig {
    fn default() -> Self {
        Self {
            genetic_code: DEFAULT_GENETIC_CODE.to_string(),
            gencode_catalog: None,
            output_format: OutputFormat::default(),
            num_threads: None,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NcbiConfig::default();
        assert_eq!(config.genetic_code, "11");
        assert!(config.gencode_catalog.is_none());
        assert_eq!(config.output_format, OutputFormat::Tsv);
        assert!(config.num_threads.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_output_format_parse() {
        for name in OutputFormat::NAMES {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.name(), name);
        }
        assert_eq!("FAA".parse::<OutputFormat>().unwrap(), OutputFormat::Faa);
        assert!(matches!(
            "gff".parse::<OutputFormat>(),
            Err(NcbiError::Parse(_))
        ));
    }
}
