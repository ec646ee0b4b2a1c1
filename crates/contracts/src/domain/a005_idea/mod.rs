pub mod aggregate;

pub use aggregate::{Idea, IdeaDraft, IdeaFields, IdeaId};
