pub mod app;
pub mod table;
