mod list_contact_submissions_service;
mod mark_contact_read_service;
mod submit_contact_service;

pub use list_contact_submissions_service::ListContactSubmissionsService;
pub use mark_contact_read_service::MarkContactReadService;
pub use submit_contact_service::SubmitContactService;
