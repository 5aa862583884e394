//! NCBI genetic code table numbers

/// Supported translation table numbers, in ascending order.
///
/// 7, 8 and 17-20 are not assigned in the NCBI numbering.
pub const GENETIC_CODE_IDS: [u32; 17] = [
    1,  // Standard
    2,  // Vertebrate Mitochondrial
    3,  // Yeast Mitochondrial
    4,  // Mold, Protozoan and Coelenterate Mitochondrial; Mycoplasma/Spiroplasma
    5,  // Invertebrate Mitochondrial
    6,  // Ciliate, Dasycladacean and Hexamita Nuclear
    9,  // Echinoderm and Flatworm Mitochondrial
    10, // Euplotid Nuclear
    11, // Bacterial, Archaeal and Plant Plastid
    12, // Alternative Yeast Nuclear
    13, // Ascidian Mitochondrial
    14, // Alternative Flatworm Mitochondrial
    15, // Blepharisma Nuclear
    16, // Chlorophycean Mitochondrial
    21, // Trematode Mitochondrial
    22, // Scenedesmus obliquus Mitochondrial
    23, // Thraustochytrium Mitochondrial
];

/// Get the genetic code table numbers
pub fn get_genetic_code_ids() -> Vec<u32> {
    GENETIC_CODE_IDS.to_vec()
}
