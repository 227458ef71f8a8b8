pub mod application_modal;
pub mod applications;
pub mod comparison;
pub mod demo_modal;
pub mod feature_modal;
pub mod features;
pub mod footer;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod pricing;
pub mod request_demo_modal;
pub mod testimonials;
