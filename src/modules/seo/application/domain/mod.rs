pub mod robots;
pub mod sitemap;
