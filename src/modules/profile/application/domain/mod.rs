pub mod entities;

pub use entities::{ContactInfo, Hobby, Profile, ProfileStats, SiteSettings, StatsPatch};
