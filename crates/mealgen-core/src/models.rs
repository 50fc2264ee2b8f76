//! Wire payloads for the recipe backend
//!
//! These mirror the JSON bodies of the two backend endpoints. Optional
//! request fields are omitted entirely when absent, never sent as empty
//! strings.

use serde::{Deserialize, Serialize};

use crate::restrictions::join_restrictions;

/// Request body for `POST /generate-meal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMealRequest {
    /// Free-text meal description; omitted when blank after trimming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Selected restrictions joined with ", " in toggle order; omitted when
    /// nothing is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
}

impl GenerateMealRequest {
    /// Build the request from the raw form fields.
    pub fn from_form(description: &str, selected: &[String]) -> Self {
        let description = description.trim();
        Self {
            description: (!description.is_empty()).then(|| description.to_string()),
            dietary_restrictions: join_restrictions(selected),
        }
    }
}

/// Successful response from `POST /generate-meal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealResponse {
    /// Generated recipe as an HTML fragment
    pub meal: String,

    /// URL of the generated meal image
    pub image_url: String,
}

/// Successful response from `POST /analyze-pantry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryAnalysis {
    /// Free-text description of the ingredients detected in the image
    pub ingredients: String,
}

/// Error payload convention shared by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message; the backend may omit it
    #[serde(default)]
    pub detail: Option<String>,
}
