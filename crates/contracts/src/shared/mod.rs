pub mod charts;
pub mod indicators;
pub mod validation;
