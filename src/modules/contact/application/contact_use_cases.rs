use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsUseCase, MarkContactReadUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactSubmissionsUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkContactReadUseCase + Send + Sync>,
}
