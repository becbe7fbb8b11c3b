use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    certifications, education, experience, portfolio_categories, portfolio_project_categories,
    portfolio_projects, services,
};
use crate::modules::content::application::domain::entities::{
    format_date_range, Certification, DateRangeStyle, Education, Experience, PortfolioCategory,
    PortfolioProject, Service,
};
use crate::modules::content::application::ports::outgoing::{ContentQuery, ContentQueryError};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn category_slugs_for(
        &self,
        project_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, ContentQueryError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = portfolio_project_categories::Entity::find()
            .select_only()
            .column(portfolio_project_categories::Column::ProjectId)
            .column(portfolio_categories::Column::Slug)
            .join(
                JoinType::InnerJoin,
                portfolio_project_categories::Relation::Categories.def(),
            )
            .filter(portfolio_project_categories::Column::ProjectId.is_in(project_ids))
            .order_by_asc(portfolio_categories::Column::Order)
            .order_by_asc(portfolio_categories::Column::Name)
            .into_model::<ProjectCategoryRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_project: HashMap<Uuid, Vec<String>> = HashMap::new();
        for row in rows {
            by_project.entry(row.project_id).or_default().push(row.slug);
        }
        Ok(by_project)
    }
}

#[derive(Debug, FromQueryResult)]
struct ProjectCategoryRow {
    project_id: Uuid,
    slug: String,
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn list_active_services(&self) -> Result<Vec<Service>, ContentQueryError> {
        let rows = services::Entity::find()
            .filter(services::Column::IsActive.eq(true))
            .order_by_asc(services::Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| Service {
                id: m.id,
                title: m.title,
                description: m.description,
                icon: m.icon,
                order: m.order,
            })
            .collect())
    }

    async fn list_active_education(&self) -> Result<Vec<Education>, ContentQueryError> {
        let rows = education::Entity::find()
            .filter(education::Column::IsActive.eq(true))
            .order_by_asc(education::Column::Order)
            .order_by_desc(education::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| Education {
                date_range: format_date_range(m.start_date, m.end_date, DateRangeStyle::Long),
                id: m.id,
                degree: m.degree,
                subtitle: m.subtitle,
                institution: m.institution,
                start_date: m.start_date,
                end_date: m.end_date,
                description: m.description,
                order: m.order,
            })
            .collect())
    }

    async fn list_active_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        let rows = experience::Entity::find()
            .filter(experience::Column::IsActive.eq(true))
            .order_by_asc(experience::Column::Order)
            .order_by_desc(experience::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| Experience {
                date_range: format_date_range(m.start_date, m.end_date, DateRangeStyle::Short),
                id: m.id,
                organization: m.organization,
                role: m.role,
                start_date: m.start_date,
                end_date: m.end_date,
                description: m.description,
                order: m.order,
            })
            .collect())
    }

    async fn list_active_certifications(&self) -> Result<Vec<Certification>, ContentQueryError> {
        let rows = certifications::Entity::find()
            .filter(certifications::Column::IsActive.eq(true))
            .order_by_asc(certifications::Column::Order)
            .order_by_desc(certifications::Column::Year)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| Certification {
                id: m.id,
                title: m.title,
                issuer: m.issuer,
                year: m.year,
                order: m.order,
            })
            .collect())
    }

    async fn list_portfolio_categories(
        &self,
    ) -> Result<Vec<PortfolioCategory>, ContentQueryError> {
        let rows = portfolio_categories::Entity::find()
            .order_by_asc(portfolio_categories::Column::Order)
            .order_by_asc(portfolio_categories::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| PortfolioCategory {
                id: m.id,
                name: m.name,
                slug: m.slug,
                order: m.order,
            })
            .collect())
    }

    async fn list_active_projects(&self) -> Result<Vec<PortfolioProject>, ContentQueryError> {
        let rows = portfolio_projects::Entity::find()
            .filter(portfolio_projects::Column::IsActive.eq(true))
            .order_by_asc(portfolio_projects::Column::Order)
            .order_by_desc(portfolio_projects::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut slugs = self
            .category_slugs_for(rows.iter().map(|m| m.id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| PortfolioProject {
                category_slugs: slugs.remove(&m.id).unwrap_or_default(),
                id: m.id,
                title: m.title,
                image: m.image,
                description: m.description,
                kicker: m.kicker,
                role: m.role,
                link: m.link,
                is_featured: m.is_featured,
                order: m.order,
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
