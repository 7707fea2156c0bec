use std::collections::HashMap;

/// Synonyms recognized out of the box, keyed by their normalized form.
const DEFAULT_UNITS: &[(&str, &[&str])] = &[
    ("tbsp", &["tablespoons", "tablespoon", "tbsp"]),
    ("tsp", &["teaspoons", "teaspoon", "tsp"]),
    ("oz", &["ounces", "ounce", "oz"]),
    ("cup", &["cups", "cup"]),
    ("lb", &["pounds", "pound", "lb"]),
    ("g", &["grams", "gram", "g"]),
];

/// Lookup table from unit words to their normalized abbreviation.
///
/// The default table is small and makes no claim to completeness; callers
/// extend it with [`UnitTable::with_unit`] (or the `units` config section).
#[derive(Debug, Clone)]
pub struct UnitTable {
    synonyms: HashMap<String, String>,
}

impl Default for UnitTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (canonical, synonyms) in DEFAULT_UNITS {
            table.insert(canonical, synonyms.iter().copied());
        }
        table
    }
}

impl UnitTable {
    /// A table that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
        }
    }

    /// Add (or override) a unit. The canonical form always matches itself.
    pub fn with_unit<I, S>(mut self, canonical: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(canonical, synonyms);
        self
    }

    fn insert<I, S>(&mut self, canonical: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return;
        }
        for synonym in synonyms {
            let synonym = synonym.as_ref().trim().to_lowercase();
            if !synonym.is_empty() {
                self.synonyms.insert(synonym, canonical.clone());
            }
        }
        self.synonyms.insert(canonical.clone(), canonical);
    }

    /// Normalize a single whitespace-delimited token.
    ///
    /// Leading and trailing punctuation is ignored, so `"cups,"` and
    /// `"Tbsp."` match while `"cupcakes"` does not.
    pub fn normalize(&self, token: &str) -> Option<&str> {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return None;
        }
        self.synonyms.get(&word.to_lowercase()).map(String::as_str)
    }
}
