mod achievement_query;

pub use achievement_query::{AchievementQuery, AchievementQueryError};
