mod admin_contact;
mod submit_contact;

pub use admin_contact::*;
pub use submit_contact::*;
