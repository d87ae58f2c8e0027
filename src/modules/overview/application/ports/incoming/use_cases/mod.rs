mod errors;
mod get_about;
mod get_home;

pub use errors::OverviewError;
pub use get_about::{AboutPage, GetAboutUseCase};
pub use get_home::{GetHomeUseCase, HomePage};
