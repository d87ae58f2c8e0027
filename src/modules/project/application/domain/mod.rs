pub mod entities;

pub use entities::{DifficultyLevel, Project, ProjectDomainError, ProjectType};
