pub mod dto;

pub use dto::{
    WasteRecyclingSummary, WASTE_COMPOSTED, WASTE_ENERGY, WASTE_LANDFILL, WASTE_RECYCLED,
};
