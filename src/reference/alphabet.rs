//! Nucleotide and amino acid alphabets
//!
//! Both alphabets keep their listed order. The nucleotide order drives the
//! codon enumeration in [`crate::reference::codon`].

/// DNA bases in codon enumeration order (not alphabetical)
pub const NUCLEOTIDE_ALPHABET: [char; 4] = ['T', 'C', 'A', 'G'];

/// The 20 standard amino acids by one-letter code
pub const AMINO_ALPHABET: [char; 20] = [
    'A', // Alanine
    'R', // Arginine
    'N', // Asparagine
    'D', // Aspartic acid
    'C', // Cysteine
    'Q', // Glutamine
    'E', // Glutamic acid
    'G', // Glycine
    'H', // Histidine
    'I', // Isoleucine
    'L', // Leucine
    'K', // Lysine
    'M', // Methionine
    'F', // Phenylalanine
    'P', // Proline
    'S', // Serine
    'T', // Threonine
    'W', // Tryptophan
    'Y', // Tyrosine
    'V', // Valine
];

/// Get the nucleotide alphabet
pub fn get_nucleotide_alphabet() -> Vec<char> {
    NUCLEOTIDE_ALPHABET.to_vec()
}

/// Get the amino acid alphabet
pub fn get_amino_alphabet() -> Vec<char> {
    AMINO_ALPHABET.to_vec()
}
