use bio::bio_types::strand::Strand;

use crate::sequence::reverse_complement;
use crate::types::Location;

/// Extract the coding sequence at `location`, oriented 5' to 3'.
///
/// Locations whose end precedes their start wrap around the origin of a
/// circular genome. Reverse-strand genes are reverse complemented. The
/// genome is never modified.
///
/// Returns `None` when either coordinate lies outside the genome; callers
/// skip such records.
///
/// # Examples
///
/// ```rust
/// use bio::bio_types::strand::Strand;
/// use ncbikit_core::sequence::extract_coding_sequence;
/// use ncbikit_core::types::Location;
///
/// let genome = b"GGATGAAATAACC";
/// let cds = extract_coding_sequence(genome, &Location::new(3, 11, Strand::Forward));
/// assert_eq!(cds.as_deref(), Some(&b"ATGAAATAA"[..]));
///
/// let wrapped = extract_coding_sequence(genome, &Location::new(12, 2, Strand::Forward));
/// assert_eq!(wrapped.as_deref(), Some(&b"CCGG"[..]));
/// ```
#[must_use]
pub fn extract_coding_sequence(genome: &[u8], location: &Location) -> Option<Vec<u8>> {
    if !location.is_within(genome.len()) {
        return None;
    }

    let start = location.from - 1;
    let mut cds = if location.is_wraparound() {
        let mut cds = Vec::with_capacity(location.span(genome.len()));
        cds.extend_from_slice(&genome[start..]);
        cds.extend_from_slice(&genome[..location.to]);
        cds
    } else {
        genome[start..location.to].to_vec()
    };

    if location.strand == Strand::Reverse {
        cds = reverse_complement(&cds);
    }

    Some(cds)
}
