pub mod entities;

pub use entities::{ContactMessage, NewContactMessage};
