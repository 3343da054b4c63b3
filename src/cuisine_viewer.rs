// cuisine_viewer.rs
use crate::config::Config;
use crate::csv_utils::CsvBuilder;
use crate::dataset_manager::{download_treated, load_treated};
use crate::user_experience::{
    handle_back_flag, handle_cancel_flag, handle_quit_flag, handle_special_flag,
    prompt_country_filter,
};
use crate::user_interaction::{
    determine_action_as_number, determine_selection_as_list, get_user_input_level_2,
    print_insight_level_2, print_list_level_2, print_metric,
};

/// The cuisine multiselect default, exactly the dashboard's.
const DEFAULT_CUISINES: [&str; 7] = [
    "Home-made",
    "BBQ",
    "Japanese",
    "Brazilian",
    "Arabian",
    "American",
    "Italian",
];

/// The five cuisines that get a best-restaurant tile.
const HIGHLIGHTED_CUISINES: [&str; 5] =
    ["Italian", "American", "Arabian", "Japanese", "Brazilian"];

/// The cuisines view: best-restaurant tiles, a top-N restaurants table and
/// the best/worst cuisine rating charts.
pub async fn handle_cuisine_view(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_builder = load_treated(config)?;
    prompt_country_filter(&mut csv_builder);
    let mut restaurant_limit = prompt_restaurant_limit();
    let mut cuisine_subset = prompt_cuisine_subset(&csv_builder);

    render_view(&csv_builder, restaurant_limit, &cuisine_subset)?;

    let menu_options = vec!["RESELECT FILTERS", "DOWNLOAD TREATED DATA", "BACK"];

    loop {
        print_insight_level_2("The cuisines view, bro:");
        print_list_level_2(&menu_options);

        let choice = get_user_input_level_2("Enter your choice: ").to_lowercase();

        if handle_special_flag(&choice, &mut csv_builder, config) {
            continue;
        }
        if handle_back_flag(&choice) {
            break;
        }
        let _ = handle_quit_flag(&choice);

        match determine_action_as_number(&menu_options, &choice) {
            Some(1) => {
                csv_builder = load_treated(config)?;
                prompt_country_filter(&mut csv_builder);
                restaurant_limit = prompt_restaurant_limit();
                cuisine_subset = prompt_cuisine_subset(&csv_builder);
                render_view(&csv_builder, restaurant_limit, &cuisine_subset)?;
            }
            Some(2) => {
                download_treated(&mut csv_builder, config)?;
            }
            Some(3) => break,
            _ => {
                print_insight_level_2("Dude, that option's a no-go. Give it another whirl.");
            }
        }
    }

    Ok(())
}

/// The restaurant-count slider stand-in: 1 to 20, default 10, out-of-range
/// input clamped to the slider bounds.
fn prompt_restaurant_limit() -> usize {
    let choice =
        get_user_input_level_2("How many restaurants do you want to see (1-20, blank for 10)? ");
    if handle_cancel_flag(&choice) {
        return 10;
    }
    match choice.trim().parse::<usize>() {
        Ok(n) => n.clamp(1, 20),
        Err(_) => 10,
    }
}

fn prompt_cuisine_subset(builder: &CsvBuilder) -> Vec<String> {
    let cuisines = builder.get_unique("cuisines");
    print_insight_level_2(&format!(
        "{} cuisine types in the current selection.",
        cuisines.len()
    ));
    let choice = get_user_input_level_2(
        "Cuisine types for the top-restaurants table (comma-separated, blank for the house picks): ",
    );
    if choice.trim().is_empty() || handle_cancel_flag(&choice) {
        return DEFAULT_CUISINES.iter().map(|c| c.to_string()).collect();
    }
    determine_selection_as_list(&cuisines, &choice)
}

fn render_view(
    builder: &CsvBuilder,
    restaurant_limit: usize,
    cuisine_subset: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    print_insight_level_2("Best restaurants of the main cuisine types:");
    for cuisine in HIGHLIGHTED_CUISINES {
        render_best_of_cuisine(builder, cuisine)?;
    }

    println!();
    print_insight_level_2("Top restaurants:");
    let mut top = builder.from_copy();
    top.retain_where_in("cuisines", cuisine_subset)
        .retain_columns(vec![
            "restaurant_id",
            "restaurant_name",
            "country",
            "city",
            "cuisines",
            "average_cost_for_two",
            "aggregate_rating",
            "votes",
        ])
        .cascade_sort(vec![
            ("aggregate_rating".to_string(), "DESC".to_string()),
            ("restaurant_id".to_string(), "ASC".to_string()),
        ])
        .limit(restaurant_limit)
        .print_table();

    println!();
    print_insight_level_2("Best rated cuisine types:");
    let mut best = builder.group_mean(vec!["cuisines"], "aggregate_rating", "rating_mean", 2);
    best.cascade_sort(vec![("rating_mean".to_string(), "DESC".to_string())])
        .limit(20)
        .limit(restaurant_limit)
        .print_bar_chart("cuisines", "rating_mean");

    println!();
    print_insight_level_2("Worst rated cuisine types:");
    let mut worst = builder.group_mean(vec!["cuisines"], "aggregate_rating", "rating_mean", 2);
    worst
        .cascade_sort(vec![("rating_mean".to_string(), "ASC".to_string())])
        .limit(20)
        .limit(restaurant_limit)
        .print_bar_chart("cuisines", "rating_mean");
    println!();

    Ok(())
}

/// One best-restaurant tile: case-insensitive cuisine match, best rating
/// first, lowest id breaking ties. An empty match aborts the section, the
/// way the dashboard's unconditional first-row access did.
fn render_best_of_cuisine(
    builder: &CsvBuilder,
    cuisine: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut matches = builder.from_copy();
    matches
        .retain_where_contains("cuisines", cuisine, true)
        .cascade_sort(vec![
            ("aggregate_rating".to_string(), "DESC".to_string()),
            ("restaurant_id".to_string(), "ASC".to_string()),
        ]);

    let cell = |name: &str| -> String {
        matches
            .get_cell(0, name)
            .unwrap_or_default()
            .to_string()
    };

    if matches.first_row().is_none() {
        return Err(format!("no restaurants left for cuisine '{}'", cuisine).into());
    }

    print_metric(
        &format!("{}: {}", cuisine, cell("restaurant_name")),
        &format!("{}/5.0", cell("aggregate_rating")),
    );
    print_insight_level_2(&format!(
        "{} / {} / plate for two: {}",
        cell("country"),
        cell("city"),
        cell("average_cost_for_two")
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treated_builder() -> CsvBuilder {
        let headers = vec![
            "restaurant_id",
            "restaurant_name",
            "country",
            "city",
            "cuisines",
            "average_cost_for_two",
            "aggregate_rating",
            "votes",
        ];
        let rows = vec![
            vec!["10", "Pasta Bros", "Brazil", "Sao Paulo", "Italian", "90", "4.9", "900"],
            vec!["7", "Trattoria Uno", "England", "London", "Italian", "70", "4.9", "450"],
            vec!["3", "Smoke Pit", "United States of America", "Dallas", "BBQ", "40", "4.2", "300"],
        ];
        CsvBuilder::from_raw_data(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    #[test]
    fn best_of_cuisine_breaks_rating_ties_by_lowest_id() {
        let builder = treated_builder();
        let mut matches = builder.from_copy();
        matches
            .retain_where_contains("cuisines", "italian", true)
            .cascade_sort(vec![
                ("aggregate_rating".to_string(), "DESC".to_string()),
                ("restaurant_id".to_string(), "ASC".to_string()),
            ]);
        assert_eq!(matches.get_cell(0, "restaurant_name"), Some("Trattoria Uno"));
    }

    #[test]
    fn best_of_missing_cuisine_is_an_error() {
        let builder = treated_builder();
        assert!(render_best_of_cuisine(&builder, "Arabian").is_err());
    }
}
