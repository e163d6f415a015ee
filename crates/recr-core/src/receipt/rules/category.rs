//! Expense category classification for parsed line items.

/// Category used when no keyword matches.
pub const DEFAULT_CATEGORY: &str = "General Supplies";

/// Ordered category table; the first category whose keyword list contains a
/// substring of the description wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Seeds & Plants", &["seed", "plant", "seedling", "bulb", "sapling"]),
    ("Fertilizers", &["fertilizer", "compost", "manure", "nitrogen", "phosphate"]),
    ("Pesticides", &["pesticide", "herbicide", "insecticide", "fungicide", "spray"]),
    ("Tools & Equipment", &["shovel", "rake", "hoe", "tractor", "mower", "tool"]),
    ("Feed & Nutrition", &["feed", "grain", "hay", "corn", "oats", "supplement"]),
    ("Fuel & Energy", &["gas", "diesel", "fuel", "oil", "propane", "electric"]),
    ("Maintenance", &["repair", "part", "maintenance", "service", "replacement"]),
    ("Supplies", &["bag", "container", "packaging", "supplies", "material"]),
];

/// Classify an item description into the fixed farm-expense vocabulary.
pub fn categorize_item(description: &str) -> String {
    let lower = description.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return (*category).to_string();
        }
    }
    DEFAULT_CATEGORY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_match() {
        assert_eq!(categorize_item("FERTILIZER BAG"), "Fertilizers");
        assert_eq!(categorize_item("GARDEN TOOL SET"), "Tools & Equipment");
        assert_eq!(categorize_item("DIESEL 20L"), "Fuel & Energy");
        assert_eq!(categorize_item("chicken feed 50lb"), "Feed & Nutrition");
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "plant" (Seeds & Plants) appears before "fertilizer" in the table.
        assert_eq!(categorize_item("plant fertilizer"), "Seeds & Plants");
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(categorize_item("WIDGET"), DEFAULT_CATEGORY);
        assert_eq!(categorize_item(""), DEFAULT_CATEGORY);
    }
}
