pub mod api;
pub mod config;
pub mod text;
pub mod validation;
