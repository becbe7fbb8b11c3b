pub mod domain;
pub mod ports;
pub mod seo_use_cases;
pub mod services;
