pub mod entities;

pub use entities::{Achievement, AchievementDomainError, AchievementType};
