use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{
    Certification, Education, Experience, PortfolioCategory, PortfolioProject, Service,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, public collections)
// ──────────────────────────────────────────────────────────
//

/// Every list is already filtered to active rows and sorted in display order.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn list_active_services(&self) -> Result<Vec<Service>, ContentQueryError>;

    async fn list_active_education(&self) -> Result<Vec<Education>, ContentQueryError>;

    async fn list_active_experience(&self) -> Result<Vec<Experience>, ContentQueryError>;

    async fn list_active_certifications(&self) -> Result<Vec<Certification>, ContentQueryError>;

    /// Categories have no active flag; all of them are returned.
    async fn list_portfolio_categories(
        &self,
    ) -> Result<Vec<PortfolioCategory>, ContentQueryError>;

    async fn list_active_projects(&self) -> Result<Vec<PortfolioProject>, ContentQueryError>;
}
