use crate::constants::{CODON_COUNT, CODON_LENGTH, NUCLEOTIDE_ORDER, START_MARKER};
use crate::types::NcbiError;

/// A nucleotide triplet.
pub type Codon = [u8; CODON_LENGTH];

/// Position of a nucleotide in [`NUCLEOTIDE_ORDER`], case-insensitive.
#[must_use]
pub const fn nucleotide_rank(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Index of a codon in the encoded table order.
///
/// Returns `None` for anything that is not exactly three unambiguous bases.
///
/// # Examples
///
/// ```rust
/// use ncbikit_core::gencode::codon_index;
///
/// assert_eq!(codon_index(b"TTT"), Some(0));
/// assert_eq!(codon_index(b"ATG"), Some(35));
/// assert_eq!(codon_index(b"GGG"), Some(63));
/// assert_eq!(codon_index(b"NNN"), None);
/// ```
#[must_use]
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != CODON_LENGTH {
        return None;
    }
    let first = nucleotide_rank(codon[0])?;
    let second = nucleotide_rank(codon[1])?;
    let third = nucleotide_rank(codon[2])?;
    Some(first * 16 + second * 4 + third)
}

/// Codon at a position of the encoded table order.
#[must_use]
pub const fn codon_at(index: usize) -> Codon {
    [
        NUCLEOTIDE_ORDER[(index / 16) % 4],
        NUCLEOTIDE_ORDER[(index / 4) % 4],
        NUCLEOTIDE_ORDER[index % 4],
    ]
}

/// Iterate over all 64 codons in encoded table order.
pub fn all_codons() -> impl Iterator<Item = Codon> {
    (0..CODON_COUNT).map(codon_at)
}

/// Decoded translation table for one genetic code.
///
/// Every array is indexed by [`codon_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    residues: [u8; CODON_COUNT],
    starts: [bool; CODON_COUNT],
    four_fold: [bool; CODON_COUNT],
}

impl CodonTable {
    /// Decode the NCBI amino-acid and start-marker strings.
    ///
    /// Both strings must hold at least 64 symbols; anything past the 64th
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`NcbiError::MalformedTable`] if either string is shorter
    /// than 64 symbols.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ncbikit_core::gencode::CodonTable;
    ///
    /// let table = CodonTable::build(
    ///     b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    ///     b"---M---------------M---------------M----------------------------",
    /// )?;
    /// assert_eq!(table.translate(b"TTT"), Some(b'F'));
    /// assert!(table.is_start(b"ATG"));
    /// assert!(table.is_four_fold(b"CTT"));
    /// # Ok::<(), ncbikit_core::types::NcbiError>(())
    /// ```
    pub fn build(amino_acids: &[u8], start_markers: &[u8]) -> Result<Self, NcbiError> {
        let amino_acids = truncate_to_table(amino_acids, "amino acid")?;
        let start_markers = truncate_to_table(start_markers, "start codon")?;

        let mut residues = [0u8; CODON_COUNT];
        residues.copy_from_slice(amino_acids);

        let mut starts = [false; CODON_COUNT];
        for (flag, &marker) in starts.iter_mut().zip(start_markers) {
            *flag = marker == START_MARKER;
        }

        // Each run of four consecutive entries shares the first two bases.
        let mut four_fold = [false; CODON_COUNT];
        for (family, flags) in residues.chunks(4).zip(four_fold.chunks_mut(4)) {
            let degenerate = family.iter().all(|&aa| aa == family[0]);
            flags.fill(degenerate);
        }

        Ok(Self {
            residues,
            starts,
            four_fold,
        })
    }

    /// Residue encoded by `codon`, or `None` for an ambiguous codon.
    #[must_use]
    pub fn translate(&self, codon: &[u8]) -> Option<u8> {
        codon_index(codon).map(|i| self.residues[i])
    }

    #[must_use]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|i| self.starts[i])
    }

    /// Whether the third position of `codon` is four-fold degenerate.
    #[must_use]
    pub fn is_four_fold(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|i| self.four_fold[i])
    }

    /// Start codons in table order.
    pub fn start_codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.starts
            .iter()
            .enumerate()
            .filter(|&(_, &is_start)| is_start)
            .map(|(i, _)| codon_at(i))
    }

    /// All `(codon, residue)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (Codon, u8)> + '_ {
        self.residues
            .iter()
            .enumerate()
            .map(|(i, &aa)| (codon_at(i), aa))
    }

    /// Four-fold classification of every codon in table order.
    pub fn four_fold_codons(&self) -> impl Iterator<Item = (Codon, bool)> + '_ {
        self.four_fold
            .iter()
            .enumerate()
            .map(|(i, &ff)| (codon_at(i), ff))
    }
}

fn truncate_to_table<'a>(symbols: &'a [u8], which: &'static str) -> Result<&'a [u8], NcbiError> {
    symbols
        .get(..CODON_COUNT)
        .ok_or(NcbiError::MalformedTable {
            which,
            expected: CODON_COUNT,
            found: symbols.len(),
        })
}
