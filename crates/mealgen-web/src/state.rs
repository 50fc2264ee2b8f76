//! Application state using Sycamore signals
//!
//! All reactive state for the mealgen page. The root component creates one
//! `AppState` and hands copies to its children; request bookkeeping and
//! result storage go through the transition methods below rather than raw
//! signal writes, so the rules (sanitize before store, discard stale
//! settlements) hold everywhere.

use mealgen_core::api::DEFAULT_BASE_URL;
use mealgen_core::models::{MealResponse, PantryAnalysis};
use mealgen_core::restrictions;
use mealgen_core::sanitize_recipe_html;
use mealgen_core::tracker::RequestTracker;
use sycamore::prelude::*;

/// Application state context
#[derive(Clone)]
pub struct AppState {
    // === Form fields ===
    /// Free-text meal description, bound to the text input
    pub description: Signal<String>,

    /// Selected restriction labels, in toggle order
    pub selected_restrictions: Signal<Vec<String>>,

    // === Results ===
    /// Sanitized recipe HTML from the last successful generation
    pub meal_html: Signal<String>,

    /// Image URL from the last successful generation
    pub recipe_image_url: Signal<String>,

    /// Ingredient text from the last successful pantry analysis
    pub pantry_ingredients: Signal<String>,

    // === Request bookkeeping ===
    /// Tracker for recipe generation requests
    pub generation: Signal<RequestTracker>,

    /// Tracker for pantry upload requests
    pub upload: Signal<RequestTracker>,

    /// Backend base URL
    pub api_base: String,
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self {
            description: create_signal(String::new()),
            selected_restrictions: create_signal(Vec::new()),
            meal_html: create_signal(String::new()),
            recipe_image_url: create_signal(String::new()),
            pantry_ingredients: create_signal(String::new()),
            generation: create_signal(RequestTracker::new()),
            upload: create_signal(RequestTracker::new()),
            api_base: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Toggle a restriction chip.
    pub fn toggle_restriction(&self, label: &str) {
        let mut selected = self.selected_restrictions.get_clone();
        restrictions::toggle_restriction(&mut selected, label);
        self.selected_restrictions.set(selected);
    }

    /// Check whether a restriction chip is selected.
    pub fn is_restriction_selected(&self, label: &str) -> bool {
        restrictions::is_selected(&self.selected_restrictions.get_clone(), label)
    }

    /// Start a generation request, returning its sequence number.
    pub fn begin_generation(&self) -> u64 {
        let mut tracker = self.generation.get();
        let seq = tracker.begin();
        self.generation.set(tracker);
        seq
    }

    /// Settle a generation request.
    ///
    /// Returns `false` for a stale settlement; the caller must then discard
    /// the response without touching any stored result.
    pub fn settle_generation(&self, seq: u64) -> bool {
        let mut tracker = self.generation.get();
        let settled = tracker.settle(seq);
        if settled {
            self.generation.set(tracker);
        }
        settled
    }

    /// Whether a generation request is outstanding.
    pub fn is_generating(&self) -> bool {
        self.generation.get().is_in_flight()
    }

    /// Start a pantry upload, returning its sequence number.
    pub fn begin_upload(&self) -> u64 {
        let mut tracker = self.upload.get();
        let seq = tracker.begin();
        self.upload.set(tracker);
        seq
    }

    /// Settle a pantry upload; same staleness contract as
    /// [`Self::settle_generation`].
    pub fn settle_upload(&self, seq: u64) -> bool {
        let mut tracker = self.upload.get();
        let settled = tracker.settle(seq);
        if settled {
            self.upload.set(tracker);
        }
        settled
    }

    /// Whether a pantry upload is outstanding.
    pub fn is_uploading(&self) -> bool {
        self.upload.get().is_in_flight()
    }

    /// Store a successful generation result.
    ///
    /// The recipe HTML is sanitized here, before it ever reaches a signal,
    /// so the view can only render the allowed subset.
    pub fn apply_meal(&self, response: MealResponse) {
        self.meal_html.set(sanitize_recipe_html(&response.meal));
        self.recipe_image_url.set(response.image_url);
    }

    /// Store a successful pantry analysis, replacing any prior text.
    pub fn apply_pantry(&self, analysis: PantryAnalysis) {
        self.pantry_ingredients.set(analysis.ingredients);
    }

    /// Whether a recipe is available to render.
    pub fn has_meal(&self) -> bool {
        !self.meal_html.get_clone().is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sycamore::reactive::create_root;

    #[test]
    fn test_toggle_updates_selection_signal() {
        let _root = create_root(|| {
            let state = AppState::new();
            state.toggle_restriction("Vegan");
            state.toggle_restriction("Keto");
            assert_eq!(
                state.selected_restrictions.get_clone(),
                vec!["Vegan".to_string(), "Keto".to_string()]
            );

            state.toggle_restriction("Vegan");
            assert_eq!(
                state.selected_restrictions.get_clone(),
                vec!["Keto".to_string()]
            );
            assert!(state.is_restriction_selected("Keto"));
            assert!(!state.is_restriction_selected("Vegan"));
        });
    }

    #[test]
    fn test_generation_flag_lifecycle() {
        let _root = create_root(|| {
            let state = AppState::new();
            assert!(!state.is_generating());

            let seq = state.begin_generation();
            assert!(state.is_generating(), "flag must be set while outstanding");

            assert!(state.settle_generation(seq));
            assert!(!state.is_generating(), "flag must clear on settlement");
        });
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let _root = create_root(|| {
            let state = AppState::new();
            let old = state.begin_generation();
            let new = state.begin_generation();

            assert!(!state.settle_generation(old));
            assert!(state.is_generating(), "newer request must stay in flight");
            assert!(state.settle_generation(new));
        });
    }

    #[test]
    fn test_trackers_are_independent() {
        let _root = create_root(|| {
            let state = AppState::new();
            let generation_seq = state.begin_generation();
            assert!(!state.is_uploading());

            let upload_seq = state.begin_upload();
            assert!(state.is_generating());
            assert!(state.is_uploading());

            assert!(state.settle_upload(upload_seq));
            assert!(
                state.is_generating(),
                "settling the upload must not touch generation"
            );
            assert!(state.settle_generation(generation_seq));
        });
    }

    #[test]
    fn test_apply_meal_sanitizes_html() {
        let _root = create_root(|| {
            let state = AppState::new();
            assert!(!state.has_meal());

            state.apply_meal(MealResponse {
                meal: "<p>Eat pasta</p><script>alert(1)</script>".to_string(),
                image_url: "https://x/img.png".to_string(),
            });
            assert_eq!(state.meal_html.get_clone(), "<p>Eat pasta</p>");
            assert_eq!(state.recipe_image_url.get_clone(), "https://x/img.png");
            assert!(state.has_meal());
        });
    }

    #[test]
    fn test_upload_replaces_prior_ingredients() {
        let _root = create_root(|| {
            let state = AppState::new();
            state.apply_pantry(PantryAnalysis {
                ingredients: "eggs, milk".to_string(),
            });
            state.apply_pantry(PantryAnalysis {
                ingredients: "eggs, milk, flour".to_string(),
            });
            assert_eq!(state.pantry_ingredients.get_clone(), "eggs, milk, flour");
        });
    }
}
