//! Dietary restriction vocabulary and selection operations
//!
//! The restriction set is fixed; the user toggles labels on and off. The
//! selection keeps toggle order because that order determines the joined
//! string sent to the backend. The chip row always renders in vocabulary
//! order regardless of when each label was toggled.

/// Dietary restrictions offered by the form, in render order.
pub const RESTRICTIONS: [&str; 6] = [
    "Vegetarian",
    "Vegan",
    "Gluten-free",
    "Dairy-free",
    "Nut-free",
    "Keto",
];

/// Toggle a restriction label in the selection.
///
/// Removes the label if present, appends it otherwise. Toggling the same
/// label twice restores the selection exactly, including the order of the
/// remaining labels.
pub fn toggle_restriction(selected: &mut Vec<String>, label: &str) {
    if let Some(pos) = selected.iter().position(|s| s == label) {
        selected.remove(pos);
    } else {
        selected.push(label.to_string());
    }
}

/// Check whether a label is currently selected.
pub fn is_selected(selected: &[String], label: &str) -> bool {
    selected.iter().any(|s| s == label)
}

/// Join the selection for the wire payload.
///
/// Labels are joined with `", "` in toggle order; an empty selection yields
/// `None` so the field can be omitted entirely.
pub fn join_restrictions(selected: &[String]) -> Option<String> {
    if selected.is_empty() {
        None
    } else {
        Some(selected.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a selection by toggling labels in order
    fn toggled(labels: &[&str]) -> Vec<String> {
        let mut selected = Vec::new();
        for label in labels {
            toggle_restriction(&mut selected, label);
        }
        selected
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selected = Vec::new();
        toggle_restriction(&mut selected, "Vegan");
        assert_eq!(selected, vec!["Vegan".to_string()]);

        toggle_restriction(&mut selected, "Vegan");
        assert!(
            selected.is_empty(),
            "second toggle should remove the label, got {:?}",
            selected
        );
    }

    #[test]
    fn test_double_toggle_restores_prior_selection() {
        let before = toggled(&["Keto", "Vegan"]);
        for label in RESTRICTIONS {
            let mut selected = before.clone();
            toggle_restriction(&mut selected, label);
            toggle_restriction(&mut selected, label);
            assert_eq!(
                selected, before,
                "double toggle of {} changed the selection",
                label
            );
        }
    }

    #[test]
    fn test_toggle_preserves_order_of_remaining_labels() {
        let mut selected = toggled(&["Vegan", "Gluten-free", "Keto"]);
        toggle_restriction(&mut selected, "Gluten-free");
        assert_eq!(selected, vec!["Vegan".to_string(), "Keto".to_string()]);
    }

    #[test]
    fn test_is_selected() {
        let selected = toggled(&["Dairy-free"]);
        assert!(is_selected(&selected, "Dairy-free"));
        assert!(!is_selected(&selected, "Nut-free"));
    }

    #[test]
    fn test_join_follows_toggle_order() {
        let selected = toggled(&["Vegan", "Keto"]);
        assert_eq!(join_restrictions(&selected).as_deref(), Some("Vegan, Keto"));

        let reversed = toggled(&["Keto", "Vegan"]);
        assert_eq!(join_restrictions(&reversed).as_deref(), Some("Keto, Vegan"));
    }

    #[test]
    fn test_join_empty_selection_is_none() {
        assert_eq!(join_restrictions(&[]), None);
    }
}
