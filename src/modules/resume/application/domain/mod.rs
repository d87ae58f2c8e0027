pub mod builder;
pub mod document;
pub mod filename;
pub mod layout;

pub use builder::{build_resume, ResumeContent};
pub use document::{Line, Paragraph, ResumeDocument, Section, SectionKind, Span, TitleBlock};
pub use filename::resume_filename;
pub use layout::{layout_document, PageGeometry, PlacedLine, PlacedPage, PlacedRun};
