// city_viewer.rs
use crate::config::Config;
use crate::csv_utils::CsvBuilder;
use crate::dataset_manager::{download_treated, load_treated};
use crate::user_experience::{
    handle_back_flag, handle_quit_flag, handle_special_flag, prompt_country_filter,
};
use crate::user_interaction::{
    determine_action_as_number, get_user_input_level_2, print_insight_level_2, print_list_level_2,
};

/// The cities view: top-N city rankings over the filtered table.
pub async fn handle_city_view(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_builder = load_treated(config)?;
    prompt_country_filter(&mut csv_builder);

    render_rankings(&csv_builder);

    let menu_options = vec!["RESELECT COUNTRIES", "DOWNLOAD TREATED DATA", "BACK"];

    loop {
        print_insight_level_2("The cities view, bro:");
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
                render_rankings(&csv_builder);
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

/// Appends a "City (Country)" label column so the charts carry both, the
/// way the dashboard colored city bars by country.
fn label_city_with_country(grouped: &mut CsvBuilder) {
    let city_idx = grouped.column_index("city").expect("city column");
    let country_idx = grouped.column_index("country").expect("country column");
    grouped.append_derived_column("city_and_country", move |row| {
        format!("{} ({})", row[city_idx], row[country_idx])
    });
}

fn render_rankings(builder: &CsvBuilder) {
    println!();
    print_insight_level_2("TOP 10 cities with the most registered restaurants:");
    let mut top_cities = builder.group_count(vec!["city", "country"], "restaurant_count");
    top_cities
        .cascade_sort(vec![
            ("restaurant_count".to_string(), "DESC".to_string()),
            ("city".to_string(), "ASC".to_string()),
        ])
        .limit(10);
    label_city_with_country(&mut top_cities);
    top_cities.print_bar_chart("city_and_country", "restaurant_count");

    println!();
    print_insight_level_2("TOP 7 cities with restaurants rated 4.0 and above:");
    let mut well_rated = builder.from_copy();
    well_rated.retain_where_numeric("aggregate_rating", ">=", 4.0);
    let mut top_well_rated = well_rated.group_count(vec!["country", "city"], "restaurant_count");
    top_well_rated
        .cascade_sort(vec![("restaurant_count".to_string(), "DESC".to_string())])
        .limit(7);
    label_city_with_country(&mut top_well_rated);
    top_well_rated.print_bar_chart("city_and_country", "restaurant_count");

    println!();
    print_insight_level_2("TOP 7 cities with restaurants rated 2.5 and below:");
    let mut poorly_rated = builder.from_copy();
    poorly_rated.retain_where_numeric("aggregate_rating", "<=", 2.5);
    let mut top_poorly_rated = poorly_rated.group_count(vec!["country", "city"], "restaurant_count");
    top_poorly_rated
        .cascade_sort(vec![("restaurant_count".to_string(), "DESC".to_string())])
        .limit(7);
    label_city_with_country(&mut top_poorly_rated);
    top_poorly_rated.print_bar_chart("city_and_country", "restaurant_count");

    println!();
    print_insight_level_2("TOP 10 cities with the most distinct cuisine types:");
    let mut distinct_cuisines =
        builder.group_count_unique(vec!["country", "city"], "cuisines", "cuisine_count");
    distinct_cuisines
        .cascade_sort(vec![
            ("cuisine_count".to_string(), "DESC".to_string()),
            ("country".to_string(), "ASC".to_string()),
        ])
        .limit(10);
    label_city_with_country(&mut distinct_cuisines);
    distinct_cuisines.print_bar_chart("city_and_country", "cuisine_count");
    println!();
}
