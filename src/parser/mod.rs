pub mod detail;
pub mod index;
pub mod schema;
pub mod text;
