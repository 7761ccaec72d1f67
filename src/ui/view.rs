//! Plain-text rendering of [`UiState`].

use std::fmt::Write;

use super::state::UiState;

pub const TITLE: &str = "AI Product Recommendation Demo";
pub const RECOMMENDED_HEADING: &str = "Recommended Products";
pub const CATALOG_HEADING: &str = "All Products";
pub const CATALOG_LOADING: &str = "Loading products...";
pub const RECOMMENDED_BADGE: &str = "⭐ Recommended";

/// Label of the submit control for the current state
pub fn submit_label(state: &UiState) -> &'static str {
    if state.is_loading_recommendation {
        "Getting recommendations..."
    } else {
        "Get Recommendations"
    }
}

/// Render the whole page
pub fn render(state: &UiState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut out, state);
    out
}

fn write_page(out: &mut String, state: &UiState) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;

    let disabled = if state.can_submit() { "" } else { " (disabled)" };
    writeln!(out, "[{}]{}", submit_label(state), disabled)?;

    if let Some(error) = &state.error_message {
        writeln!(out)?;
        writeln!(out, "{error}")?;
    }

    if !state.recommended_products.is_empty() {
        writeln!(out)?;
        writeln!(out, "{RECOMMENDED_HEADING}")?;
        for product in &state.recommended_products {
            writeln!(out, "  - {product}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{CATALOG_HEADING}")?;
    if state.is_loading_catalog {
        writeln!(out, "{CATALOG_LOADING}")?;
        return Ok(());
    }

    for product in &state.products {
        if state.is_recommended(product.id) {
            writeln!(out, "  * {product}  {RECOMMENDED_BADGE}")?;
        } else {
            writeln!(out, "    {product}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn phone() -> Product {
        Product::new(1, "Phone A", 400.0, "Electronics")
    }

    #[test]
    fn test_loading_indicator_replaces_catalog() {
        let state = UiState {
            products: vec![phone()],
            is_loading_catalog: true,
            ..UiState::default()
        };
        let page = render(&state);
        assert!(page.contains(CATALOG_LOADING));
        assert!(!page.contains("Phone A"));
    }

    #[test]
    fn test_recommended_section_and_badge() {
        let mut state = UiState {
            products: vec![phone(), Product::new(2, "Laptop B", 999.0, "Computers")],
            recommended_products: vec![phone()],
            ..UiState::default()
        };
        state.recommended_ids.insert(1);

        let page = render(&state);
        assert!(page.contains(RECOMMENDED_HEADING));
        assert!(page.contains("  - Phone A — $400 (Electronics)"));
        assert!(page.contains("  * Phone A — $400 (Electronics)  ⭐ Recommended"));
        assert!(page.contains("    Laptop B — $999 (Computers)\n"));
    }

    #[test]
    fn test_no_recommended_section_when_empty() {
        let mut state = UiState {
            products: vec![phone()],
            ..UiState::default()
        };
        // ids alone do not produce the section
        state.recommended_ids.insert(1);

        let page = render(&state);
        assert!(!page.contains(RECOMMENDED_HEADING));
        assert!(page.contains(RECOMMENDED_BADGE));
    }

    #[test]
    fn test_recommended_section_keeps_service_order() {
        let state = UiState {
            recommended_products: vec![
                Product::new(3, "Zeta", 10.0, "Misc"),
                Product::new(1, "Alpha", 20.0, "Misc"),
            ],
            ..UiState::default()
        };
        let page = render(&state);
        let zeta = page.find("Zeta").unwrap();
        let alpha = page.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_error_is_shown() {
        let state = UiState {
            error_message: Some("Failed to get recommendations.".to_string()),
            ..UiState::default()
        };
        assert!(render(&state).contains("Failed to get recommendations."));
    }

    #[test]
    fn test_submit_control_state() {
        let mut state = UiState {
            preferences_text: "cheap phone".to_string(),
            ..UiState::default()
        };
        assert!(render(&state).contains("[Get Recommendations]\n"));

        state.is_loading_recommendation = true;
        assert!(render(&state).contains("[Getting recommendations...] (disabled)"));

        state.is_loading_recommendation = false;
        state.preferences_text = "   ".to_string();
        assert!(render(&state).contains("[Get Recommendations] (disabled)"));
    }
}
