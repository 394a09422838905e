use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::constants::CATALOG_FIELD_COUNT;
use crate::dump::split_dump_row;
use crate::gencode::GeneticCode;
use crate::gencode::catalog::DEFAULT_CATALOG;
use crate::types::NcbiError;

static DEFAULT_REGISTRY: OnceLock<GeneticCodeRegistry> = OnceLock::new();

/// Genetic codes keyed by NCBI id.
///
/// The registry is immutable once loaded. Build one explicitly with
/// [`load_default`](Self::load_default) or
/// [`load_from_source`](Self::load_from_source), or share the process-wide
/// copy of the built-in catalog through [`cached_default`](Self::cached_default).
#[derive(Debug, Clone, Default)]
pub struct GeneticCodeRegistry {
    codes: HashMap<String, GeneticCode>,
}

impl GeneticCodeRegistry {
    /// Parse the built-in catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded catalog itself is malformed.
    pub fn load_default() -> Result<Self, NcbiError> {
        Self::load_from_source(DEFAULT_CATALOG.lines())
    }

    /// Registry for the built-in catalog, parsed on first use.
    ///
    /// Concurrent first callers may each parse the catalog; exactly one
    /// result is kept and every caller sees the same instance afterwards.
    ///
    /// # Errors
    ///
    /// Same as [`load_default`](Self::load_default).
    pub fn cached_default() -> Result<&'static Self, NcbiError> {
        if let Some(registry) = DEFAULT_REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::load_default()?;
        Ok(DEFAULT_REGISTRY.get_or_init(|| registry))
    }

    /// Parse catalog rows from any line source.
    ///
    /// Rows follow the `gencode.dmp` layout: id, abbreviation, name, amino
    /// acids and start markers separated by `"\t|\t"`. Blank lines and rows
    /// without a translation table are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`NcbiError::MalformedCatalog`] on the first row with too few
    /// fields, a missing id, or a table that cannot be decoded. No partial
    /// registry is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ncbikit_core::gencode::GeneticCodeRegistry;
    ///
    /// let rows = [
    ///     "1\t|\t\t|\tStandard\t|\tFFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG\t|\t---M---------------M---------------M----------------------------\t|",
    /// ];
    /// let registry = GeneticCodeRegistry::load_from_source(rows)?;
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.require("1")?.name, "Standard");
    /// # Ok::<(), ncbikit_core::types::NcbiError>(())
    /// ```
    pub fn load_from_source<I, S>(lines: I) -> Result<Self, NcbiError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = HashMap::new();
        for (index, line) in lines.into_iter().enumerate() {
            let Some(code) = parse_catalog_line(line.as_ref(), index + 1)? else {
                continue;
            };
            if let Some(previous) = codes.insert(code.id.clone(), code) {
                warn!(
                    "Genetic code {} defined more than once; keeping the later entry",
                    previous.id
                );
            }
        }
        Ok(Self { codes })
    }

    /// Parse a catalog from a buffered reader such as an open `gencode.dmp`.
    ///
    /// # Errors
    ///
    /// I/O failures are returned as [`NcbiError::Io`]; parse failures as for
    /// [`load_from_source`](Self::load_from_source).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, NcbiError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::load_from_source(lines)
    }

    /// Parse a catalog file.
    ///
    /// # Errors
    ///
    /// See [`from_reader`](Self::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, NcbiError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GeneticCode> {
        self.codes.get(id)
    }

    /// Look up a genetic code that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`NcbiError::UnknownGeneticCode`] if `id` is not registered.
    pub fn require(&self, id: &str) -> Result<&GeneticCode, NcbiError> {
        self.get(id)
            .ok_or_else(|| NcbiError::UnknownGeneticCode(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.codes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Registered codes ordered by numeric id.
    #[must_use]
    pub fn codes(&self) -> Vec<&GeneticCode> {
        let mut codes: Vec<&GeneticCode> = self.codes.values().collect();
        codes.sort_by(|a, b| id_sort_key(&a.id).cmp(&id_sort_key(&b.id)));
        codes
    }

    /// Registered ids ordered numerically.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.codes().into_iter().map(|gc| gc.id.as_str()).collect()
    }
}

fn id_sort_key(id: &str) -> (u64, &str) {
    (id.parse().unwrap_or(u64::MAX), id)
}

fn parse_catalog_line(line: &str, line_number: usize) -> Result<Option<GeneticCode>, NcbiError> {
    let Some(fields) = split_dump_row(line) else {
        return Ok(None);
    };
    if fields.len() < CATALOG_FIELD_COUNT {
        return Err(NcbiError::MalformedCatalog {
            line: line_number,
            reason: format!(
                "expected {} fields, found {}",
                CATALOG_FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let id = fields[0];
    if id.is_empty() {
        return Err(NcbiError::MalformedCatalog {
            line: line_number,
            reason: "missing genetic code id".to_string(),
        });
    }

    let (amino_acids, start_markers) = (fields[3], fields[4]);
    if amino_acids.is_empty() && start_markers.is_empty() {
        debug!("Skipping genetic code {} without a translation table", id);
        return Ok(None);
    }

    GeneticCode::from_encoded(
        id,
        fields[1],
        fields[2],
        amino_acids.as_bytes(),
        start_markers.as_bytes(),
    )
    .map(Some)
    .map_err(|e| NcbiError::MalformedCatalog {
        line: line_number,
        reason: format!("genetic code {}: {}", id, e),
    })
}
