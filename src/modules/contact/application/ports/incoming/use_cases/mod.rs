mod list_contact_submissions;
mod mark_contact_read;
mod submit_contact;

pub use list_contact_submissions::{ListContactSubmissionsError, ListContactSubmissionsUseCase};
pub use mark_contact_read::{MarkContactReadError, MarkContactReadUseCase};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase, CONTACT_ACCEPTED_MESSAGE};
