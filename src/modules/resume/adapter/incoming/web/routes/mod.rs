mod download_resume;

pub use download_resume::*;
