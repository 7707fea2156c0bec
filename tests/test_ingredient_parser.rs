use recipe_scaler::{IngredientParser, IngredientRecord, UnitTable};

fn parse(line: &str) -> IngredientRecord {
    IngredientParser::default().parse(line)
}

/// Put a record back into line form, the way a user would write it.
fn rewrap(record: &IngredientRecord) -> String {
    let mut parts = Vec::new();
    if let Some(count) = record.count {
        parts.push(count.to_string());
    }
    if !record.unit.is_empty() {
        parts.push(record.unit.clone());
    }
    if !record.ingredient.is_empty() {
        parts.push(record.ingredient.clone());
    }
    parts.join(" ")
}

#[test]
fn test_every_default_synonym_normalizes() {
    let cases = [
        ("tablespoons", "tbsp"),
        ("tablespoon", "tbsp"),
        ("tbsp", "tbsp"),
        ("teaspoons", "tsp"),
        ("teaspoon", "tsp"),
        ("tsp", "tsp"),
        ("ounces", "oz"),
        ("ounce", "oz"),
        ("oz", "oz"),
        ("cups", "cup"),
        ("cup", "cup"),
        ("pounds", "lb"),
        ("pound", "lb"),
        ("lb", "lb"),
        ("grams", "g"),
        ("gram", "g"),
        ("g", "g"),
    ];

    for (word, expected) in cases {
        for line in [
            format!("2 {word} sugar"),
            format!("2 {} sugar", word.to_uppercase()),
            format!("Sugar, roughly 2 {word}"),
            format!("{word} of sugar"),
        ] {
            assert_eq!(parse(&line).unit, expected, "line: {line}");
        }
    }
}

#[test]
fn test_unit_must_be_whole_word() {
    let record = parse("2 cupcakes");
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "cupcakes");

    let record = parse("1 egg");
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "egg");
}

#[test]
fn test_joined_unit_words_are_not_units() {
    // Units are matched per whitespace token, so `-` and `/` joins hide them.
    let record = parse("2 8-ounce cans tomatoes");
    assert_eq!(record.count, Some(2.0));
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "8-ounce cans tomatoes");

    let record = parse("2 cups/500g flour");
    assert_eq!(record.count, Some(2.0));
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "cups/500g flour");
}

#[test]
fn test_integral_decimal_mixed_number() {
    let record = parse("2.0 ½ eggs");
    assert_eq!(record.count, Some(2.5));
    assert_eq!(record.ingredient, "eggs");
}

#[test]
fn test_quantity_values() {
    let cases = [
        ("1/2 cup milk", 0.5),
        ("½ cup milk", 0.5),
        ("1-1/2 cups flour", 1.5),
        ("1 1/2 cups flour", 1.5),
        ("1½ cups flour", 1.5),
        ("2 eggs", 2.0),
        ("2.25 lb beef", 2.25),
        ("3/4 tsp salt", 0.75),
        ("10 g yeast", 10.0),
    ];
    for (line, expected) in cases {
        assert_eq!(parse(line).count, Some(expected), "line: {line}");
    }
}

#[test]
fn test_sifted_flour_line() {
    let record = parse("1-1/2 cups plain flour (sifted)");
    assert_eq!(
        record,
        IngredientRecord {
            count: Some(1.5),
            unit: "cup".to_string(),
            ingredient: "plain flour".to_string(),
        }
    );
}

#[test]
fn test_unknown_unit_stays_in_text() {
    // kg is not in the default table; the line degrades rather than guessing.
    let record = parse("1.5 kg carrots, chopped");
    assert_eq!(
        record,
        IngredientRecord {
            count: Some(1.5),
            unit: String::new(),
            ingredient: "kg carrots, chopped".to_string(),
        }
    );
}

#[test]
fn test_extended_table_recognizes_kg() {
    let parser = IngredientParser::new(UnitTable::default().with_unit("kg", ["kilograms"]));
    let record = parser.parse("1.5 kg carrots, chopped");
    assert_eq!(record.count, Some(1.5));
    assert_eq!(record.unit, "kg");
    assert_eq!(record.ingredient, "carrots, chopped");
}

#[test]
fn test_text_only_line() {
    let record = parse("Freshly ground  BLACK pepper");
    assert_eq!(record.count, None);
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "freshly ground black pepper");
}

#[test]
fn test_asides_removed() {
    let record = parse("1 (8 ounce) package cream cheese [softened]");
    assert_eq!(record.count, Some(1.0));
    assert_eq!(record.unit, "");
    assert_eq!(record.ingredient, "package cream cheese");
}

#[test]
fn test_malformed_lines_degrade() {
    for line in ["", "()", "/", "1/0 cup sugar", "-", "½/½", "4-5 potatoes"] {
        let record = parse(line);
        assert_eq!(record.count, None, "line: {line:?}");
    }
    assert_eq!(parse("4-5 potatoes").ingredient, "4-5 potatoes");
}

#[test]
fn test_one_record_per_line_in_order() {
    let lines = [
        "4 1/2 cups (20.25 ounces) unbleached high-gluten flour",
        "2 teaspoons salt",
        "1 teaspoon instant yeast",
        "1/4 cup olive oil (optional)",
        "1 3/4 cups water, ice cold",
        "Semolina or cornmeal for dusting",
    ];
    let records = IngredientParser::default().parse_all(lines);

    assert_eq!(records.len(), lines.len());
    let summary: Vec<(Option<f64>, &str)> = records
        .iter()
        .map(|r| (r.count, r.unit.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some(4.5), "cup"),
            (Some(2.0), "tsp"),
            (Some(1.0), "tsp"),
            (Some(0.25), "cup"),
            (Some(1.75), "cup"),
            (None, ""),
        ]
    );
    assert_eq!(records[4].ingredient, "water, ice cold");
    assert_eq!(records[5].ingredient, "semolina or cornmeal for dusting");
}

#[test]
fn test_reparsing_normalized_text_is_stable() {
    let lines = [
        "1-1/2 cups plain flour (sifted)",
        "2 Tablespoons of Butter, melted",
        "1.5 kg carrots, chopped",
        "Salt and pepper to taste",
        "¾ cup sugar plus 2 tbsp",
        "Juice of 1 lemon",
        "3 large eggs",
        "1 cup flour plus 1 cup water",
        "2.0 ½ eggs",
        "2.5 ½ eggs",
    ];
    let parser = IngredientParser::default();

    for line in lines {
        let first = parser.parse(line);
        let second = parser.parse(&rewrap(&first));
        assert_eq!(first.ingredient, second.ingredient, "line: {line}");
        assert_eq!(first.unit, second.unit, "line: {line}");
        assert_eq!(first.count, second.count, "line: {line}");
    }
}

#[test]
fn test_convenience_function() {
    let records = recipe_scaler::parse_ingredients(vec!["2 cups milk".to_string()]);
    assert_eq!(records[0].unit, "cup");
}
