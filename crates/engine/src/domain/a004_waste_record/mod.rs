pub mod session;

pub use session::WasteSession;
