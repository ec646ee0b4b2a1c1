pub mod session;

pub use session::EnergySession;
