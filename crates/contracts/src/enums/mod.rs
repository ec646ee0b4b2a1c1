pub mod department;
pub mod disposal_method;
pub mod emission_type;
pub mod energy_type;
pub mod idea_category;
pub mod idea_priority;
pub mod idea_status;
pub mod reduction_status;
pub mod value_chain_category;
pub mod waste_type;

pub use department::Department;
pub use disposal_method::DisposalMethod;
pub use emission_type::EmissionType;
pub use energy_type::EnergyType;
pub use idea_category::IdeaCategory;
pub use idea_priority::IdeaPriority;
pub use idea_status::IdeaStatus;
pub use reduction_status::ReductionStatus;
pub use value_chain_category::ValueChainCategory;
pub use waste_type::WasteType;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_codes_round_trip {
        ($($ty:ty),+ $(,)?) => {$(
            for variant in <$ty>::all() {
                assert_eq!(<$ty>::from_code(variant.code()), Some(variant));
                assert!(!variant.display_name().is_empty());
            }
        )+};
    }

    #[test]
    fn test_codes_round_trip_for_every_enum() {
        assert_codes_round_trip!(
            Department,
            DisposalMethod,
            EmissionType,
            EnergyType,
            IdeaCategory,
            IdeaPriority,
            IdeaStatus,
            ReductionStatus,
            ValueChainCategory,
            WasteType,
        );
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert_eq!(EmissionType::from_code("fuel"), None);
        // codes are case-sensitive
        assert_eq!(IdeaStatus::from_code("Submitted"), None);
    }
}
