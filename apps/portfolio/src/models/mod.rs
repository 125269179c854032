pub mod blog;
pub mod profile;
pub mod project;
pub mod resume;
