//! Leading-quantity recognition for ingredient lines.
//!
//! Forms are tried in a fixed priority order and the first match wins:
//! simple fraction, then mixed number, then plain integer/decimal.

/// The shape of a recognized quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityForm {
    Fraction,
    MixedNumber,
    Decimal,
}

/// A quantity found at the start of a token stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub form: QuantityForm,
    /// Number of leading tokens the quantity spans.
    pub tokens: usize,
}

type Matcher = fn(&[&str]) -> Option<(f64, usize)>;

const QUANTITY_PATTERNS: &[(QuantityForm, Matcher)] = &[
    (QuantityForm::Fraction, match_fraction),
    (QuantityForm::MixedNumber, match_mixed_number),
    (QuantityForm::Decimal, match_decimal),
];

/// Recognize a quantity starting at the first token.
pub fn extract(tokens: &[&str]) -> Option<Quantity> {
    QUANTITY_PATTERNS.iter().find_map(|(form, matcher)| {
        matcher(tokens).and_then(|(value, consumed)| {
            (value.is_finite() && value >= 0.0).then_some(Quantity {
                value,
                form: *form,
                tokens: consumed,
            })
        })
    })
}

fn match_fraction(tokens: &[&str]) -> Option<(f64, usize)> {
    let value = parse_fraction(tokens.first()?)?;
    Some((value, 1))
}

fn match_mixed_number(tokens: &[&str]) -> Option<(f64, usize)> {
    let first = *tokens.first()?;

    // 1-1/2
    if let Some((whole, fraction)) = first.split_once('-') {
        let value = parse_whole(whole)? + parse_fraction(fraction)?;
        return Some((value, 1));
    }

    // 1½
    let mut chars = first.chars();
    if let Some(last) = chars.next_back() {
        if let (Some(fraction), Some(whole)) = (vulgar_fraction(last), parse_whole(chars.as_str()))
        {
            return Some((whole + fraction, 1));
        }
    }

    // 1 1/2
    let whole = parse_whole(first)?;
    let fraction = parse_fraction(tokens.get(1)?)?;
    Some((whole + fraction, 2))
}

fn match_decimal(tokens: &[&str]) -> Option<(f64, usize)> {
    parse_decimal(tokens.first()?).map(|value| (value, 1))
}

/// Digits with at most one `.`; no signs, exponents or `inf`.
fn parse_decimal(token: &str) -> Option<f64> {
    let digits = token.chars().filter(char::is_ascii_digit).count();
    let dots = token.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != token.chars().count() {
        return None;
    }
    token.parse::<f64>().ok()
}

/// Whole part of a mixed number: `2`, and also `2.0` since that is how an
/// integer count prints back.
fn parse_whole(token: &str) -> Option<f64> {
    parse_decimal(token).filter(|value| value.fract() == 0.0)
}

/// `½`, `1/2` or `1⁄2`.
fn parse_fraction(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(value) = vulgar_fraction(c) {
            return Some(value);
        }
    }

    let (numerator, denominator) = token
        .split_once('/')
        .or_else(|| token.split_once('\u{2044}'))?;
    let numerator = parse_integer(numerator)?;
    let denominator = parse_integer(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn parse_integer(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok()
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅐' => 1.0 / 7.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        '⅑' => 1.0 / 9.0,
        '⅒' => 1.0 / 10.0,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(line: &str) -> Option<Quantity> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        extract(&tokens)
    }

    #[test]
    fn test_simple_fractions() {
        let q = quantity("1/2 cup").unwrap();
        assert_eq!(q.value, 0.5);
        assert_eq!(q.form, QuantityForm::Fraction);
        assert_eq!(q.tokens, 1);

        assert_eq!(quantity("¾ cup").unwrap().value, 0.75);
        assert_eq!(quantity("3\u{2044}4 cup").unwrap().value, 0.75);
    }

    #[test]
    fn test_mixed_numbers() {
        let dashed = quantity("1-1/2 cups").unwrap();
        assert_eq!(dashed.value, 1.5);
        assert_eq!(dashed.form, QuantityForm::MixedNumber);
        assert_eq!(dashed.tokens, 1);

        let spaced = quantity("2 1/4 cups").unwrap();
        assert_eq!(spaced.value, 2.25);
        assert_eq!(spaced.tokens, 2);

        assert_eq!(quantity("1½ cups").unwrap().value, 1.5);
        assert_eq!(quantity("1 ½ cups").unwrap().value, 1.5);
    }

    #[test]
    fn test_decimals() {
        let q = quantity("2 eggs").unwrap();
        assert_eq!(q.value, 2.0);
        assert_eq!(q.form, QuantityForm::Decimal);
        assert_eq!(quantity("1.5 kg").unwrap().value, 1.5);
        assert_eq!(quantity(".5 tsp").unwrap().value, 0.5);
    }

    #[test]
    fn test_rejects_non_quantities() {
        assert!(quantity("salt to taste").is_none());
        assert!(quantity("inf cups").is_none());
        assert!(quantity("NaN").is_none());
        assert!(quantity("-2 cups").is_none());
        assert!(quantity("1e3 g").is_none());
        assert!(quantity("1/0 cup").is_none());
        assert!(quantity("4-5 potatoes").is_none());
        assert!(quantity("1.2.3").is_none());
        assert!(quantity("").is_none());
    }

    #[test]
    fn test_integral_decimal_starts_mixed_number() {
        let spaced = quantity("2.0 ½ eggs").unwrap();
        assert_eq!(spaced.value, 2.5);
        assert_eq!(spaced.form, QuantityForm::MixedNumber);
        assert_eq!(spaced.tokens, 2);

        assert_eq!(quantity("1.0-1/2 cups").unwrap().value, 1.5);

        let fractional = quantity("2.5 ½ eggs").unwrap();
        assert_eq!(fractional.value, 2.5);
        assert_eq!(fractional.form, QuantityForm::Decimal);
        assert_eq!(fractional.tokens, 1);
    }

    #[test]
    fn test_integer_followed_by_non_fraction() {
        let q = quantity("1 2 eggs").unwrap();
        assert_eq!(q.value, 1.0);
        assert_eq!(q.tokens, 1);
    }
}
