// dataset_treater.rs
use crate::csv_utils::CsvBuilder;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Country code column values in the raw dataset, mapped to names the
    /// way the dashboard labels them. Codes outside this table enrich to
    /// an empty cell and get swept out by the cleaner.
    pub static ref COUNTRIES: HashMap<i64, &'static str> = {
        let mut m = HashMap::new();
        m.insert(1, "India");
        m.insert(14, "Australia");
        m.insert(30, "Brazil");
        m.insert(37, "Canada");
        m.insert(94, "Indonesia");
        m.insert(148, "New Zeland");
        m.insert(162, "Philippines");
        m.insert(166, "Qatar");
        m.insert(184, "Singapure");
        m.insert(189, "South Africa");
        m.insert(191, "Sri Lanka");
        m.insert(208, "Turkey");
        m.insert(214, "United Arab Emirates");
        m.insert(215, "England");
        m.insert(216, "United States of America");
        m
    };

    /// Rating color hex codes mapped to marker color names.
    pub static ref COLORS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("3F7E00", "darkgreen");
        m.insert("5BA829", "green");
        m.insert("9ACD32", "lightgreen");
        m.insert("CDD614", "orange");
        m.insert("FFBA00", "red");
        m.insert("CBCBC8", "darkred");
        m.insert("FF7800", "darkred");
        m
    };
}

/// Cuisines dropped outright at the end of cleaning.
const EXCLUDED_CUISINES: [&str; 2] = ["Mineira", "Drinks Only"];

/// Rewrites one raw column label into its snake_case form: words split on
/// spaces/underscores/dashes and on camel boundaries, then lowercased and
/// joined with underscores. "Average Cost for two" -> average_cost_for_two,
/// "Restaurant ID" -> restaurant_id. Total over any string.
pub fn snake_case_label(label: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for chunk in label.split(|c: char| c == ' ' || c == '_' || c == '-') {
        if chunk.is_empty() {
            continue;
        }
        let mut current = String::new();
        let mut prev_was_lower = false;
        for ch in chunk.chars() {
            if ch.is_uppercase() && prev_was_lower && !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
            prev_was_lower = ch.is_lowercase() || ch.is_numeric();
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<String>>()
        .join("_")
}

/// Normalizes every header of the table through `snake_case_label`.
pub fn rename_columns(builder: &mut CsvBuilder) {
    let renamed: Vec<String> = builder
        .get_headers()
        .iter()
        .map(|h| snake_case_label(h))
        .collect();
    builder.set_header(renamed);
}

pub fn country_name(country_code: &str) -> Option<&'static str> {
    let code = country_code.trim().parse::<i64>().ok()?;
    COUNTRIES.get(&code).copied()
}

/// Price range 1/2/3 -> cheap/normal/expensive; everything else, junk
/// included, lands in the gourmet bucket like the original's else branch.
pub fn price_type(price_range: &str) -> &'static str {
    match price_range.trim().parse::<i64>() {
        Ok(1) => "cheap",
        Ok(2) => "normal",
        Ok(3) => "expensive",
        _ => "gourmet",
    }
}

pub fn color_name(rating_color: &str) -> Option<&'static str> {
    COLORS.get(rating_color.trim()).copied()
}

/// Appends the three derived columns. Each reads only raw columns, so the
/// order of the appends carries no meaning.
pub fn enrich(builder: &mut CsvBuilder) {
    let code_idx = builder
        .column_index("country_code")
        .expect("country_code column missing");
    builder.append_derived_column("country", move |row| {
        row.get(code_idx)
            .and_then(|cell| country_name(cell))
            .unwrap_or("")
            .to_string()
    });

    let range_idx = builder
        .column_index("price_range")
        .expect("price_range column missing");
    builder.append_derived_column("price_type", move |row| {
        row.get(range_idx)
            .map(|cell| price_type(cell))
            .unwrap_or("gourmet")
            .to_string()
    });

    let color_idx = builder
        .column_index("rating_color")
        .expect("rating_color column missing");
    builder.append_derived_column("color_name", move |row| {
        row.get(color_idx)
            .and_then(|cell| color_name(cell))
            .unwrap_or("")
            .to_string()
    });
}

/// The fixed cleaning sequence. Rows with empty cells go first; the column
/// sweep afterwards only fires when a lookup missed on every row and left
/// a fully-hollow column behind, which keeps the "no empty cell anywhere"
/// contract without special-casing the enrichment columns.
pub fn clean(builder: &mut CsvBuilder) {
    builder
        .drop_rows_with_empty_cells()
        .drop_columns_with_empty_cells()
        .remove_duplicates()
        .map_column("cuisines", |cell| {
            cell.split(',').next().unwrap_or("").trim().to_string()
        })
        .cascade_sort(vec![("restaurant_id".to_string(), "ASC".to_string())])
        .drop_where_in("cuisines", &EXCLUDED_CUISINES);
}

/// Full treatment: normalize headers, enrich, clean. Every view runs this
/// against a fresh load of the raw file.
pub fn treat(builder: &mut CsvBuilder) {
    rename_columns(builder);
    enrich(builder);
    clean(builder);
}
