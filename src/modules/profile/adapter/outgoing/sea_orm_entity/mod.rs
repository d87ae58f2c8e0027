pub mod contact_info;
pub mod hobbies;
pub mod profile;
pub mod profile_stats;
pub mod site_settings;

/// The only legal primary key of a singleton table (`CHECK (id = 1)`).
pub const SINGLETON_ID: i32 = 1;
