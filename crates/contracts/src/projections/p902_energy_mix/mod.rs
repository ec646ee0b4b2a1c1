pub mod dto;

pub use dto::{EnergyMixSummary, ENERGY_CONVENTIONAL, ENERGY_RENEWABLE, ENERGY_TOTAL};
