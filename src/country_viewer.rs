// country_viewer.rs
use crate::config::Config;
use crate::csv_utils::CsvBuilder;
use crate::dataset_manager::{download_treated, load_treated};
use crate::user_experience::{
    handle_back_flag, handle_quit_flag, handle_special_flag, prompt_country_filter,
};
use crate::user_interaction::{
    determine_action_as_number, get_user_input_level_2, print_insight_level_2, print_list_level_2,
};

/// The countries view: four per-country bar charts over the filtered
/// table.
pub async fn handle_country_view(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_builder = load_treated(config)?;
    prompt_country_filter(&mut csv_builder);

    render_charts(&csv_builder);

    let menu_options = vec!["RESELECT COUNTRIES", "DOWNLOAD TREATED DATA", "BACK"];

    loop {
        print_insight_level_2("The countries view, bro:");
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
                render_charts(&csv_builder);
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

fn render_charts(builder: &CsvBuilder) {
    println!();
    print_insight_level_2("Restaurants registered per country:");
    let mut restaurants =
        builder.group_count_unique(vec!["country"], "restaurant_id", "restaurant_count");
    restaurants
        .cascade_sort(vec![("restaurant_count".to_string(), "DESC".to_string())])
        .print_bar_chart("country", "restaurant_count");

    println!();
    print_insight_level_2("Cities registered per country:");
    let mut cities = builder.group_count_unique(vec!["country"], "city", "city_count");
    cities
        .cascade_sort(vec![("city_count".to_string(), "DESC".to_string())])
        .print_bar_chart("country", "city_count");

    println!();
    print_insight_level_2("Average volume of ratings per country:");
    let mut votes = builder.group_mean(vec!["country"], "votes", "votes_mean", 2);
    votes
        .cascade_sort(vec![("votes_mean".to_string(), "DESC".to_string())])
        .print_bar_chart("country", "votes_mean");

    println!();
    print_insight_level_2("Average cost of a plate for two per country:");
    let mut cost = builder.group_mean(vec!["country"], "average_cost_for_two", "cost_for_two_mean", 2);
    cost.cascade_sort(vec![("cost_for_two_mean".to_string(), "DESC".to_string())])
        .print_bar_chart("country", "cost_for_two_mean");
    println!();
}
