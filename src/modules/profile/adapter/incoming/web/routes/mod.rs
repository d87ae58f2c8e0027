mod get_contact_page;
mod update_stats;

pub use get_contact_page::*;
pub use update_stats::*;
