pub mod entities;

pub use entities::{CareerDomainError, Certification, Education, Experience, ExperienceType};
