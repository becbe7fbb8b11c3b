/// Crawl rules: everything public, admin excluded, sitemap advertised.
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\n\nSitemap: {site_url}/sitemap.xml\n"
    )
}
