use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::blog::application::domain::entities::BlogPostCard;

//
// ──────────────────────────────────────────────────────────
// Site settings (singleton)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    pub hero_greeting: String,
    pub hero_name: String,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_image: Option<String>,
    pub about_title: String,
    pub about_description: String,
    pub about_image: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub footer_text: String,
}

impl SiteSettings {
    /// Identity of the only settings row that may ever exist.
    pub const SINGLETON_ID: i16 = 1;
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_greeting: "Hello, My name is".to_string(),
            hero_name: "Victorine Maikem".to_string(),
            hero_title:
                "Digital Health Systems Builder | AI in Healthcare | Health Informatics"
                    .to_string(),
            hero_description: String::new(),
            hero_image: None,
            about_title: "Building digital health systems that solve real problems.".to_string(),
            about_description: String::new(),
            about_image: None,
            logo: None,
            favicon: None,
            footer_text: "Borox".to_string(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Ordered collections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub subtitle: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub order: i32,
    /// e.g. "September, 2023 – Present"
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub organization: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub order: i32,
    /// e.g. "Sep 2023 – Present"
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub year: i32,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PortfolioCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    /// Slugs of the categories this project is filed under, in category order.
    pub category_slugs: Vec<String>,
    pub image: String,
    pub description: String,
    pub kicker: String,
    pub role: String,
    pub link: Option<String>,
    pub is_featured: bool,
    pub order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Home page aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomePage {
    pub settings: SiteSettings,
    pub services: Vec<Service>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub portfolio_categories: Vec<PortfolioCategory>,
    pub portfolio_projects: Vec<PortfolioProject>,
    pub blog_posts: Vec<BlogPostCard>,
}

//
// ──────────────────────────────────────────────────────────
// Date ranges
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeStyle {
    /// "January, 2020"
    Long,
    /// "Jan 2020"
    Short,
}

pub fn format_date_range(
    start: NaiveDate,
    end: Option<NaiveDate>,
    style: DateRangeStyle,
) -> String {
    let pattern = match style {
        DateRangeStyle::Long => "%B, %Y",
        DateRangeStyle::Short => "%b %Y",
    };

    let end = end
        .map(|d| d.format(pattern).to_string())
        .unwrap_or_else(|| "Present".to_string());

    format!("{} – {}", start.format(pattern), end)
}
