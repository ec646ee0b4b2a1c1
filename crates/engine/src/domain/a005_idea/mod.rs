pub mod session;

pub use session::IdeaSession;
