//! UI components
//!
//! The page is one form plus a recipe panel. Components share the
//! [`AppState`] handle; request round trips run through `spawn_local` and
//! settle back into state, where stale responses are dropped.

use crate::api;
use crate::state::AppState;
use mealgen_core::api::{pantry_failure_message, recipe_failure_message};
use mealgen_core::models::GenerateMealRequest;
use mealgen_core::restrictions::RESTRICTIONS;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

/// Main application component
#[component]
pub fn App() -> View {
    let state = AppState::new();

    view! {
        div(class="app") {
            header(class="app-header") {
                h1 { "Recipe Generator" }
            }

            main(class="main-content") {
                RecipePanel(state=state.clone())
                MealForm(state=state)
            }
        }
    }
}

/// Generated recipe display. Hidden until a generation has succeeded; the
/// whole card is rebuilt whenever the recipe content changes.
#[component(inline_props)]
fn RecipePanel(state: AppState) -> View {
    let meal_html = state.meal_html;
    let image_url = state.recipe_image_url;

    view! {
        (move || {
            let html = meal_html.get_clone();
            if html.is_empty() {
                return view! {};
            }
            let image = image_url.get_clone();
            view! {
                section(class="recipe-card") {
                    h2 { "Your Recipe:" }
                    (if image.is_empty() {
                        view! {}
                    } else {
                        view! {
                            img(class="recipe-image", src=image.clone(), alt="Generated recipe")
                        }
                    })
                    div(class="meal-plan-content", dangerously_set_inner_html=html.clone())
                }
            }
        })
    }
}

/// The meal preference form: description, restriction chips, pantry upload
/// and the submit button.
#[component(inline_props)]
fn MealForm(state: AppState) -> View {
    let description = state.description;
    let is_generating = create_memo({
        let state = state.clone();
        move || state.is_generating()
    });
    let submit_state = state.clone();

    view! {
        form(class="form-card", on:submit=move |event| {
            event.prevent_default();
            start_generation(&submit_state);
        }) {
            label(class="field") {
                span(class="field-label") { "Describe your meal" }
                input(
                    r#type="text",
                    class="text-input",
                    placeholder="e.g., quick pasta dish, healthy salad, comfort food",
                    bind:value=description
                )
            }

            RestrictionChips(state=state.clone())
            PantryUpload(state=state)

            button(
                r#type="submit",
                class="submit-button",
                disabled=move || is_generating.get()
            ) {
                (move || if is_generating.get() {
                    "Generating your recipe..."
                } else {
                    "Generate Recipe"
                })
            }
        }
    }
}

/// Chip row for the dietary restriction labels.
#[component(inline_props)]
fn RestrictionChips(state: AppState) -> View {
    view! {
        div(class="field") {
            span(class="field-label") { "Dietary Restrictions:" }
            div(class="chip-row") {
                Chip(state=state.clone(), label=RESTRICTIONS[0])
                Chip(state=state.clone(), label=RESTRICTIONS[1])
                Chip(state=state.clone(), label=RESTRICTIONS[2])
                Chip(state=state.clone(), label=RESTRICTIONS[3])
                Chip(state=state.clone(), label=RESTRICTIONS[4])
                Chip(state=state, label=RESTRICTIONS[5])
            }
        }
    }
}

/// One selectable restriction chip.
#[component(inline_props)]
fn Chip(state: AppState, label: &'static str) -> View {
    let selected = create_memo({
        let state = state.clone();
        move || state.is_restriction_selected(label)
    });

    view! {
        button(
            r#type="button",
            class=move || if selected.get() { "chip chip-selected" } else { "chip" },
            on:click=move |_| state.toggle_restriction(label)
        ) {
            (label)
        }
    }
}

/// Pantry photo upload plus the detected-ingredients panel.
#[component(inline_props)]
fn PantryUpload(state: AppState) -> View {
    let pantry_ingredients = state.pantry_ingredients;
    let is_uploading = create_memo({
        let state = state.clone();
        move || state.is_uploading()
    });
    let upload_state = state.clone();

    view! {
        div(class="field") {
            label(class="upload-button") {
                (move || if is_uploading.get() {
                    "Analyzing Pantry..."
                } else {
                    "Upload Pantry Image"
                })
                input(
                    r#type="file",
                    class="visually-hidden",
                    accept="image/*",
                    disabled=move || is_uploading.get(),
                    on:change=move |event| {
                        if let Some(file) = selected_file(&event) {
                            start_pantry_analysis(&upload_state, file);
                        }
                    }
                )
            }

            (move || {
                let ingredients = pantry_ingredients.get_clone();
                if ingredients.is_empty() {
                    return view! {};
                }
                view! {
                    div(class="ingredients-card") {
                        span(class="field-label") { "Detected Ingredients:" }
                        p(class="ingredients-text") { (ingredients.clone()) }
                    }
                }
            })
        }
    }
}

/// Kick off a recipe generation round trip for the current form contents.
fn start_generation(state: &AppState) {
    let request = GenerateMealRequest::from_form(
        &state.description.get_clone(),
        &state.selected_restrictions.get_clone(),
    );
    let seq = state.begin_generation();
    let state = state.clone();
    spawn_local(async move {
        let result = api::generate_meal(&state.api_base, &request).await;
        if !state.settle_generation(seq) {
            // A newer request owns the in-flight flag; drop this response.
            return;
        }
        match result {
            Ok(response) => state.apply_meal(response),
            Err(error) => api::alert(&recipe_failure_message(&error)),
        }
    });
}

/// Kick off a pantry analysis for the chosen file.
fn start_pantry_analysis(state: &AppState, file: web_sys::File) {
    let seq = state.begin_upload();
    let state = state.clone();
    spawn_local(async move {
        let result = api::analyze_pantry(&state.api_base, &file).await;
        if !state.settle_upload(seq) {
            return;
        }
        match result {
            Ok(analysis) => state.apply_pantry(analysis),
            Err(error) => api::alert(&pantry_failure_message(&error)),
        }
    });
}

/// Pull the chosen file out of the file input's change event.
fn selected_file(event: &web_sys::Event) -> Option<web_sys::File> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
