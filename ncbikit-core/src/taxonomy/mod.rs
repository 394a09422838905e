//! NCBI taxonomy dumps.
//!
//! Reads `names.dmp`, `nodes.dmp` and `gencode.dmp` from a taxonomy dump
//! directory and resolves the nuclear and mitochondrial genetic code of each
//! taxon.
//!
//! ```rust,no_run
//! use ncbikit_core::taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::from_dir("taxdump")?;
//! if let Some(code) = taxonomy.genetic_code("562") {
//!     println!("E. coli uses genetic code {} ({})", code.id, code.name);
//! }
//! # Ok::<(), ncbikit_core::types::NcbiError>(())
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::constants::{NAMES_FIELD_COUNT, NODES_FIELD_COUNT, SCIENTIFIC_NAME_CLASS};
use crate::dump::split_dump_row;
use crate::gencode::{GeneticCode, GeneticCodeRegistry};
use crate::types::NcbiError;

/// One node of the NCBI taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxon {
    /// Node id
    pub id: String,
    /// Scientific name, empty when `names.dmp` has none
    pub name: String,
    /// Parent node id
    pub parent: String,
    /// Rank (superkingdom, genus, species, ...)
    pub rank: String,
    /// Locus-name prefix
    pub embl_code: String,
    pub division: String,
    pub inherits_division: bool,
    /// Nuclear genetic code id
    pub genetic_code: String,
    pub inherits_genetic_code: bool,
    /// Mitochondrial genetic code id
    pub mitochondrial_genetic_code: String,
    pub inherits_mitochondrial_genetic_code: bool,
    /// Free-text comments and citations
    pub comments: String,
}

/// Taxa keyed by node id, with the genetic codes they refer to.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    taxa: HashMap<String, Taxon>,
    genetic_codes: GeneticCodeRegistry,
}

impl Taxonomy {
    /// Load `names.dmp`, `gencode.dmp` and `nodes.dmp` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`NcbiError::Io`] if a file is missing,
    /// [`NcbiError::MalformedDump`] for short rows and
    /// [`NcbiError::MalformedCatalog`] for a bad `gencode.dmp`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, NcbiError> {
        let dir = dir.as_ref();
        info!("Reading taxonomy from {}", dir.display());
        Self::from_readers(
            open(&dir.join("names.dmp"))?,
            open(&dir.join("gencode.dmp"))?,
            open(&dir.join("nodes.dmp"))?,
        )
    }

    /// Build a taxonomy from already opened dump readers.
    ///
    /// # Errors
    ///
    /// See [`from_dir`](Self::from_dir).
    pub fn from_readers<N, G, T>(names: N, gencode: G, nodes: T) -> Result<Self, NcbiError>
    where
        N: BufRead,
        G: BufRead,
        T: BufRead,
    {
        let names = read_names(names)?;
        let genetic_codes = GeneticCodeRegistry::from_reader(gencode)?;
        let mut taxa = read_nodes(nodes)?;
        for taxon in taxa.values_mut() {
            if let Some(name) = names.get(&taxon.id) {
                taxon.name.clone_from(name);
            }
        }

        info!(
            "Loaded {} taxa and {} genetic codes",
            taxa.len(),
            genetic_codes.len()
        );
        Ok(Self {
            taxa,
            genetic_codes,
        })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Taxon> {
        self.taxa.get(id)
    }

    /// Nuclear genetic code of a taxon.
    #[must_use]
    pub fn genetic_code(&self, taxon_id: &str) -> Option<&GeneticCode> {
        let taxon = self.get(taxon_id)?;
        self.genetic_codes.get(&taxon.genetic_code)
    }

    /// Mitochondrial genetic code of a taxon.
    #[must_use]
    pub fn mitochondrial_genetic_code(&self, taxon_id: &str) -> Option<&GeneticCode> {
        let taxon = self.get(taxon_id)?;
        self.genetic_codes.get(&taxon.mitochondrial_genetic_code)
    }

    /// Genetic codes read from `gencode.dmp`.
    #[must_use]
    pub const fn genetic_codes(&self) -> &GeneticCodeRegistry {
        &self.genetic_codes
    }

    pub fn taxa(&self) -> impl Iterator<Item = &Taxon> {
        self.taxa.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}

fn open(path: &Path) -> Result<BufReader<File>, NcbiError> {
    Ok(BufReader::new(File::open(path)?))
}

/// Scientific names keyed by taxon id.
///
/// # Errors
///
/// Returns [`NcbiError::MalformedDump`] for rows with fewer than four fields.
pub fn read_names<R: BufRead>(reader: R) -> Result<HashMap<String, String>, NcbiError> {
    let mut names = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(fields) = split_dump_row(&line) else {
            continue;
        };
        check_field_count("names.dmp", index + 1, &fields, NAMES_FIELD_COUNT)?;
        if fields[3] == SCIENTIFIC_NAME_CLASS {
            names.insert(fields[0].to_string(), fields[1].to_string());
        }
    }
    Ok(names)
}

/// Taxa keyed by id, without names.
///
/// # Errors
///
/// Returns [`NcbiError::MalformedDump`] for rows with fewer than 13 fields.
pub fn read_nodes<R: BufRead>(reader: R) -> Result<HashMap<String, Taxon>, NcbiError> {
    let mut taxa = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(fields) = split_dump_row(&line) else {
            continue;
        };
        check_field_count("nodes.dmp", index + 1, &fields, NODES_FIELD_COUNT)?;
        let taxon = Taxon {
            id: fields[0].to_string(),
            name: String::new(),
            parent: fields[1].to_string(),
            rank: fields[2].to_string(),
            embl_code: fields[3].to_string(),
            division: fields[4].to_string(),
            inherits_division: fields[5] == "1",
            genetic_code: fields[6].to_string(),
            inherits_genetic_code: fields[7] == "1",
            mitochondrial_genetic_code: fields[8].to_string(),
            inherits_mitochondrial_genetic_code: fields[9] == "1",
            comments: fields[12].to_string(),
        };
        taxa.insert(taxon.id.clone(), taxon);
    }
    Ok(taxa)
}

fn check_field_count(
    file: &str,
    line: usize,
    fields: &[&str],
    expected: usize,
) -> Result<(), NcbiError> {
    if fields.len() < expected {
        return Err(NcbiError::MalformedDump {
            file: file.to_string(),
            line,
            reason: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    Ok(())
}
