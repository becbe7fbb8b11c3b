pub mod comment_form;
pub mod entities;
