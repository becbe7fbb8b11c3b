mod get_robots;
mod get_sitemap;

pub use get_robots::GetRobotsUseCase;
pub use get_sitemap::{GetSitemapError, GetSitemapUseCase};
