use crate::api::schemas::{ErrorDetail, ErrorResponse, FormAckResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Content
use crate::content::application::domain::entities::{
    Certification, Education, Experience, HomePage, PortfolioCategory, PortfolioProject, Service,
    SiteSettings,
};
use crate::content::application::ports::incoming::use_cases::UpdateSiteSettingsCommand;

// Blog
use crate::blog::adapter::incoming::web::routes::{
    CommentFormDto, ModerateCommentRequest, ModeratedCommentResponse,
};
use crate::blog::application::domain::entities::{
    BlogDetail, BlogPost, BlogPostCard, Comment, CommentStatusFilter, CommentThread,
    PublicComment,
};

// Contact
use crate::contact::adapter::incoming::web::routes::{ContactFormDto, MarkContactReadRequest};
use crate::contact::application::domain::entities::ContactSubmission;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public pages, forms and moderation endpoints of the portfolio site",
    ),
    paths(
        // Page endpoints
        crate::content::adapter::incoming::web::routes::get_home_page_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_detail_handler,

        // Form endpoints
        crate::blog::adapter::incoming::web::routes::submit_comment_handler,
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,

        // SEO endpoints
        crate::seo::adapter::incoming::web::routes::sitemap_handler,
        crate::seo::adapter::incoming::web::routes::robots_handler,

        // Admin endpoints
        crate::content::adapter::incoming::web::routes::get_settings_handler,
        crate::content::adapter::incoming::web::routes::update_settings_handler,
        crate::blog::adapter::incoming::web::routes::list_comments_handler,
        crate::blog::adapter::incoming::web::routes::moderate_comment_handler,
        crate::contact::adapter::incoming::web::routes::list_contact_submissions_handler,
        crate::contact::adapter::incoming::web::routes::mark_contact_read_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FormAckResponse,

            // Content
            SiteSettings,
            Service,
            Education,
            Experience,
            Certification,
            PortfolioCategory,
            PortfolioProject,
            HomePage,
            UpdateSiteSettingsCommand,

            // Blog
            BlogPost,
            BlogPostCard,
            BlogDetail,
            Comment,
            PublicComment,
            CommentThread,
            CommentStatusFilter,
            CommentFormDto,
            ModerateCommentRequest,
            ModeratedCommentResponse,

            // Contact
            ContactSubmission,
            ContactFormDto,
            MarkContactReadRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "pages", description = "Rendered page view models"),
        (name = "blog", description = "Blog posts and comment submission"),
        (name = "contact", description = "Contact form"),
        (name = "seo", description = "Sitemap and robots"),
        (name = "admin", description = "Moderation and site settings"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminToken",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Value of ADMIN_API_TOKEN"))
                        .build(),
                ),
            )
        }
    }
}
