mod get_contact_page;
mod update_profile_stats;

pub use get_contact_page::{ContactPage, GetContactPageError, GetContactPageUseCase};
pub use update_profile_stats::{
    UpdateProfileStatsCommand, UpdateProfileStatsCommandError, UpdateProfileStatsError,
    UpdateProfileStatsUseCase,
};
