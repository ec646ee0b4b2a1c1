pub mod common;

pub mod a001_emission_record;
pub mod a002_energy_record;
pub mod a003_value_chain_record;
pub mod a004_waste_record;
pub mod a005_idea;
