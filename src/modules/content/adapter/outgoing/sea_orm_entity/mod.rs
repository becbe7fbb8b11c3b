pub mod certifications;
pub mod education;
pub mod experience;
pub mod portfolio_categories;
pub mod portfolio_project_categories;
pub mod portfolio_projects;
pub mod services;
pub mod site_settings;
