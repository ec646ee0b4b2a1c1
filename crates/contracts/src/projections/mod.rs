pub mod p901_emission_by_type;
pub mod p902_energy_mix;
pub mod p903_value_chain_breakdown;
pub mod p904_waste_recycling;
pub mod p905_idea_engagement;
