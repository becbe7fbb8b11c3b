mod get_robots_service;
mod get_sitemap_service;

pub use get_robots_service::GetRobotsService;
pub use get_sitemap_service::GetSitemapService;
