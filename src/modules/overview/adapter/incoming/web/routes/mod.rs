mod get_about;
mod get_home;

pub use get_about::*;
pub use get_home::*;
