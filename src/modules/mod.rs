pub mod achievement;
pub mod career;
pub mod contact;
pub mod email;
pub mod overview;
pub mod profile;
pub mod project;
pub mod resume;
pub mod skill;
