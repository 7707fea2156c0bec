mod quantity;
mod units;

pub use quantity::{Quantity, QuantityForm};
pub use units::UnitTable;

use crate::model::IngredientRecord;
use log::debug;

const FILLER_WORDS: &[&str] = &["of"];

/// Turns free-text ingredient lines into [`IngredientRecord`]s.
///
/// Parsing never fails: a line that yields no quantity or no known unit
/// still produces a record carrying its normalized text.
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    units: UnitTable,
}

impl IngredientParser {
    pub fn new(units: UnitTable) -> Self {
        Self { units }
    }

    /// Parse every line, keeping input order.
    pub fn parse_all<I, S>(&self, lines: I) -> Vec<IngredientRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.parse(line.as_ref()))
            .collect()
    }

    /// Parse a single ingredient line.
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::IngredientParser;
    ///
    /// let record = IngredientParser::default().parse("1-1/2 cups plain flour (sifted)");
    /// assert_eq!(record.count, Some(1.5));
    /// assert_eq!(record.unit, "cup");
    /// assert_eq!(record.ingredient, "plain flour");
    /// ```
    pub fn parse(&self, line: &str) -> IngredientRecord {
        let without_asides = strip_asides(line);
        let tokens: Vec<&str> = without_asides.split_whitespace().collect();

        let quantity = quantity::extract(&tokens);
        let rest = &tokens[quantity.map_or(0, |q| q.tokens)..];

        let unit = rest
            .iter()
            .enumerate()
            .find_map(|(index, token)| self.units.normalize(token).map(|unit| (index, unit)));

        let mut remaining: Vec<&str> = rest
            .iter()
            .enumerate()
            .filter(|(index, _)| unit.map_or(true, |(unit_index, _)| unit_index != *index))
            .map(|(_, token)| *token)
            .collect();

        let leading_match = quantity.is_some() || unit.is_some_and(|(index, _)| index == 0);
        if leading_match {
            let fillers = remaining
                .iter()
                .take_while(|token| FILLER_WORDS.contains(&token.to_lowercase().as_str()))
                .count();
            remaining.drain(..fillers);
        }

        match quantity {
            Some(q) => debug!("Parsed {:?} quantity {} from {:?}", q.form, q.value, line),
            None => debug!("No quantity found in ingredient line {:?}", line),
        }
        if unit.is_none() {
            debug!("No known unit in ingredient line {:?}", line);
        }

        IngredientRecord {
            count: quantity.map(|q| q.value),
            unit: unit.map(|(_, unit)| unit.to_string()).unwrap_or_default(),
            ingredient: remaining.join(" ").to_lowercase(),
        }
    }
}

/// Replace every `(...)` and `[...]` aside with a space. Nesting is allowed
/// and an unclosed aside runs to the end of the line.
fn strip_asides(line: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '(' | '[' => {
                if depth == 0 {
                    out.push(' ');
                }
                depth += 1;
            }
            ')' | ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
