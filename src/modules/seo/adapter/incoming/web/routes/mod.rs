mod robots;
mod sitemap;

pub use robots::*;
pub use sitemap::*;
