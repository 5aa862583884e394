//! Reference tables for codon-level work
//!
//! Fixed lists of genetic code table numbers, the nucleotide and amino acid
//! alphabets, and the full codon enumeration derived from the nucleotide
//! alphabet.

pub mod alphabet;
pub mod codon;
pub mod genetic_code;

pub use alphabet::*;
pub use codon::*;
pub use genetic_code::*;
