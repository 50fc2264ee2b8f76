//! Mealgen Core Library
//!
//! Browser-independent logic for the mealgen front end: the dietary
//! restriction vocabulary, wire payloads for the recipe backend, failure
//! classification, request sequencing, and recipe HTML sanitizing.

pub mod api;
pub mod models;
pub mod restrictions;
pub mod sanitize;
pub mod tracker;

// Re-export commonly used types
pub use api::{ApiError, ANALYZE_PANTRY_PATH, DEFAULT_BASE_URL, GENERATE_MEAL_PATH};
pub use models::{ErrorBody, GenerateMealRequest, MealResponse, PantryAnalysis};
pub use restrictions::RESTRICTIONS;
pub use sanitize::sanitize_recipe_html;
pub use tracker::RequestTracker;
