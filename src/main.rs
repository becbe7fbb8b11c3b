pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::blog;
pub use modules::contact;
pub use modules::content;
pub use modules::seo;

use crate::admin::adapter::incoming::web::extractors::AdminApiToken;
use crate::api::openapi::ApiDoc;
use crate::blog::adapter::outgoing::{BlogQueryPostgres, CommentRepositoryPostgres};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::services::{
    GetBlogDetailService, ListCommentsService, ModerateCommentService, SubmitCommentService,
};
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{
    ListContactSubmissionsService, MarkContactReadService, SubmitContactService,
};
use crate::content::adapter::outgoing::{ContentQueryPostgres, SiteSettingsRepositoryPostgres};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::services::{
    GetHomePageService, GetSiteSettingsService, UpdateSiteSettingsService,
};
use crate::seo::application::seo_use_cases::SeoUseCases;
use crate::seo::application::services::{GetRobotsService, GetSitemapService};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub blog: BlogUseCases,
    pub contact: ContactUseCases,
    pub seo: SeoUseCases,
}

impl AppState {
    pub fn from_connection(db: Arc<DatabaseConnection>, site_url: &str) -> Self {
        let content_query = ContentQueryPostgres::new(Arc::clone(&db));
        let settings_repo = SiteSettingsRepositoryPostgres::new(Arc::clone(&db));
        let blog_query = BlogQueryPostgres::new(Arc::clone(&db));
        let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db));
        let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));

        let content = ContentUseCases {
            get_home_page: Arc::new(GetHomePageService::new(
                content_query,
                settings_repo.clone(),
                blog_query.clone(),
            )),
            get_settings: Arc::new(GetSiteSettingsService::new(settings_repo.clone())),
            update_settings: Arc::new(UpdateSiteSettingsService::new(settings_repo)),
        };

        let blog = BlogUseCases {
            get_detail: Arc::new(GetBlogDetailService::new(blog_query.clone())),
            submit_comment: Arc::new(SubmitCommentService::new(
                blog_query.clone(),
                comment_repo.clone(),
            )),
            list_comments: Arc::new(ListCommentsService::new(comment_repo.clone())),
            moderate_comment: Arc::new(ModerateCommentService::new(comment_repo)),
        };

        let contact = ContactUseCases {
            submit: Arc::new(SubmitContactService::new(contact_repo.clone())),
            list: Arc::new(ListContactSubmissionsService::new(contact_repo.clone())),
            mark_read: Arc::new(MarkContactReadService::new(contact_repo)),
        };

        let seo = SeoUseCases {
            sitemap: Arc::new(GetSitemapService::new(blog_query, site_url)),
            robots: Arc::new(GetRobotsService::new(site_url)),
        };

        Self {
            content,
            blog,
            contact,
            seo,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None).await?;
    }

    let db_arc = Arc::new(conn);
    let state = AppState::from_connection(Arc::clone(&db_arc), &config.site_url);
    let admin_token = web::Data::new(AdminApiToken::new(config.admin_api_token.clone()));
    let openapi = ApiDoc::openapi();

    info!("Server run on: {} (public URL {})", server_url, config.site_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(admin_token.clone())
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::content::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_detail_handler);
    // Public forms
    cfg.service(crate::blog::adapter::incoming::web::routes::submit_comment_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // SEO
    cfg.service(crate::seo::adapter::incoming::web::routes::sitemap_handler);
    cfg.service(crate::seo::adapter::incoming::web::routes::robots_handler);
    // Admin
    cfg.service(crate::content::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_settings_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::list_comments_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::moderate_comment_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_contact_submissions_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::mark_contact_read_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
