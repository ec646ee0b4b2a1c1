pub mod session;

pub use session::EmissionSession;
