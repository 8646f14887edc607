// Prompt templates for place descriptions.

/// Description prompt. Replace `{name}`, `{category}` and `{address}` before sending.
pub const DESCRIPTION_PROMPT_TEMPLATE: &str = "\
Write an appealing description of the tourist destination '{name}' in Kazakhstan.
Type: {category}. Address: {address}.
Make it 150-200 words, friendly, lively and interesting, suitable for the mytravel.kz website.
Avoid repetition; keep the text unique and easy to read.";

const FALLBACK_NAME: &str = "Tourist site";
const FALLBACK_CATEGORY: &str = "Accommodation";
const FALLBACK_ADDRESS: &str = "Kazakhstan";

/// Fills the description template, substituting fallbacks for blank values.
pub fn build_description_prompt(name: &str, category: &str, address: &str) -> String {
    DESCRIPTION_PROMPT_TEMPLATE
        .replace("{name}", or_fallback(name, FALLBACK_NAME))
        .replace("{category}", or_fallback(category, FALLBACK_CATEGORY))
        .replace("{address}", or_fallback(address, FALLBACK_ADDRESS))
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_fields() {
        let prompt = build_description_prompt("Altyn Camp", "Luxury", "Talgar road, 5");
        assert!(prompt.contains("'Altyn Camp'"));
        assert!(prompt.contains("Type: Luxury. Address: Talgar road, 5."));
        assert!(prompt.contains("150-200 words"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_falls_back_for_blank_values() {
        let prompt = build_description_prompt("", " ", "");
        assert!(prompt.contains("'Tourist site'"));
        assert!(prompt.contains("Type: Accommodation. Address: Kazakhstan."));
    }
}
