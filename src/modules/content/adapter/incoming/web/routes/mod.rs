mod admin_settings;
mod get_home_page;

pub use admin_settings::*;
pub use get_home_page::*;
