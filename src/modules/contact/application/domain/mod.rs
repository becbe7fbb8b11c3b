pub mod contact_form;
pub mod entities;
