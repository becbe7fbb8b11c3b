use crate::modules::seo::application::domain::robots::render_robots;
use crate::modules::seo::application::ports::incoming::use_cases::GetRobotsUseCase;

pub struct GetRobotsService {
    site_url: String,
}

impl GetRobotsService {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }
}

impl GetRobotsUseCase for GetRobotsService {
    fn execute(&self) -> String {
        render_robots(&self.site_url)
    }
}
