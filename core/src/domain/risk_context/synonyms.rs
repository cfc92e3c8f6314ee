/// Ingredient names that commonly hide a listed allergen.
const ALLERGEN_SYNONYMS: &[(&str, &[&str])] = &[
    ("lime", &["lime zest", "lime extract", "citrus (lime)"]),
    ("nuts", &["almond", "cashew", "walnut", "peanut"]),
    ("dairy", &["milk", "butter", "cream", "cheese", "yogurt"]),
];

pub fn synonyms_for(allergy: &str) -> &'static [&'static str] {
    let allergy = allergy.trim().to_lowercase();
    ALLERGEN_SYNONYMS
        .iter()
        .find(|(name, _)| *name == allergy)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

/// Allergies followed by their known synonyms, lowercased and deduplicated.
pub fn expand_allergy_list(allergies: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    let mut push = |entry: &str| {
        if !expanded.iter().any(|e| e == entry) {
            expanded.push(entry.to_string());
        }
    };

    for allergy in allergies {
        let allergy = allergy.trim().to_lowercase();
        push(&allergy);
        for synonym in synonyms_for(&allergy) {
            push(synonym);
        }
    }
    expanded
}

/// Synonyms of the given allergies that are not themselves listed.
pub fn related_ingredients(allergies: &[String]) -> Vec<String> {
    expand_allergy_list(allergies)
        .into_iter()
        .filter(|entry| !allergies.contains(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_known_allergens() {
        let expanded = expand_allergy_list(&["Nuts".to_string(), "kiwi".to_string()]);

        assert_eq!(
            expanded,
            vec!["nuts", "almond", "cashew", "walnut", "peanut", "kiwi"]
        );
    }

    #[test]
    fn related_ingredients_skip_listed_allergies() {
        let related = related_ingredients(&["dairy".to_string(), "milk".to_string()]);

        assert_eq!(related, vec!["butter", "cream", "cheese", "yogurt"]);
    }
}
