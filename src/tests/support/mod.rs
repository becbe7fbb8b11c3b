pub mod admin_helper;
pub mod app_state_builder;
pub mod blog_mocks;
pub mod contact_mocks;
pub mod stubs;
