//! Codontab - reference tables for codon-level sequence work
//!
//! This library provides the fixed data that codon translation and sequence
//! analysis tools build on: NCBI genetic code table numbers, the nucleotide
//! and amino acid alphabets, and the ordered list of all 64 codons.

pub mod logging;
pub mod reference;

// Re-export the tables for convenience
pub use reference::*;
