mod project;

pub use project::{Project, ProjectionResult};
