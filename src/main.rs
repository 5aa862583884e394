use std::error::Error;

use human_panic::setup_panic;
use log::{debug, info};

use codontab::logging::{init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level};
use codontab::{get_amino_alphabet, get_codons, get_genetic_code_ids, get_nucleotide_alphabet};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    set_log_level();
    match init_logging() {
        Ok(_) => log_system_info(),
        Err(e) => log_critical_error(&e.to_string(), Some("logging setup")),
    }

    let genetic_code_ids = get_genetic_code_ids();
    let nucleotides = get_nucleotide_alphabet();
    let amino_acids = get_amino_alphabet();
    let codons = get_codons();

    debug!(
        "Tables: {} genetic codes, {} nucleotides, {} amino acids, {} codons",
        genetic_code_ids.len(),
        nucleotides.len(),
        amino_acids.len(),
        codons.len()
    );

    println!("{genetic_code_ids:?}");
    println!("{nucleotides:?}");
    println!("{amino_acids:?}");
    println!("{codons:?}");

    info!("Printed reference tables");
    log_shutdown();

    Ok(())
}
