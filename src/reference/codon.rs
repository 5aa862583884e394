//! Codon enumeration

use crate::reference::alphabet::get_nucleotide_alphabet;

/// Number of bases in a codon
pub const CODON_LENGTH: usize = 3;

/// Make a list of all possible codons
///
/// Codons are ordered by alphabet position, first base outermost, so with
/// the default alphabet the list runs `TTT, TTC, TTA, TTG, TCT, ..., GGG`.
pub fn get_codons() -> Vec<String> {
    let alphabet = get_nucleotide_alphabet();
    let mut codons: Vec<String> = Vec::with_capacity(alphabet.len().pow(CODON_LENGTH as u32));

    for &first in &alphabet {
        for &second in &alphabet {
            for &third in &alphabet {
                codons.push([first, second, third].iter().collect());
            }
        }
    }

    codons
}
