use crate::models::Product;

/// System message sent with every recommendation prompt
pub const SYSTEM_PROMPT: &str = "You are a product recommendation engine.";

/// Most products the model is asked to pick
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Build the user prompt asking the model for a bare JSON array of ids
pub fn build_recommendation_prompt(products: &[Product], preferences: &str) -> String {
    let product_lines = products
        .iter()
        .map(|p| {
            format!(
                "- ID: {}, name: {}, category: {}, price: {}",
                p.id, p.name, p.category, p.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a precise product recommendation engine.

You are given:
1) A fixed catalog of products.
2) A user's free-text preferences.

Your job:
- Select up to {max} products from the catalog that best match the user's preferences.
- If no products match well, return an empty array [].
- You MUST ONLY choose from the provided product IDs.
- You MUST respond with VALID JSON: a simple array of integers representing product IDs.

CATALOG:
{product_lines}

USER PREFERENCES:
"{preferences}"

RESPONSE FORMAT (important):
- Respond with ONLY a JSON array of product IDs.
- No explanation, no extra keys, no comments.
- Examples of valid responses:
  - [1, 3]
  - []
If you are unsure, return an empty array: []."#,
        max = MAX_RECOMMENDATIONS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_product() {
        let products = vec![
            Product::new(1, "Phone A", 400.0, "Electronics"),
            Product::new(6, "Wireless Earbuds", 79.99, "Audio"),
        ];
        let prompt = build_recommendation_prompt(&products, "cheap phone");

        assert!(prompt.contains("- ID: 1, name: Phone A, category: Electronics, price: 400"));
        assert!(prompt.contains("- ID: 6, name: Wireless Earbuds, category: Audio, price: 79.99"));
        assert!(prompt.contains("\"cheap phone\""));
        assert!(prompt.contains("up to 3 products"));
    }
}
