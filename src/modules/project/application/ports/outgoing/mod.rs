pub mod project_query;

pub use project_query::{ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectSort};
