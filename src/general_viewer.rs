// general_viewer.rs
use crate::config::Config;
use crate::csv_utils::{trim_float, CsvBuilder};
use crate::dataset_manager::{download_treated, load_treated};
use crate::map_exporter::export_markers;
use crate::user_experience::{
    handle_back_flag, handle_quit_flag, handle_special_flag, prompt_country_filter,
};
use crate::user_interaction::{
    determine_action_as_number, get_user_input_level_2, print_insight_level_2, print_list_level_2,
    print_metric,
};

/// The landing view: the brand metrics row plus the marker-cluster export
/// for the external map widget.
pub async fn handle_general_view(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_builder = load_treated(config)?;
    prompt_country_filter(&mut csv_builder);

    render_metrics(&csv_builder);

    let menu_options = vec![
        "EXPORT MAP MARKERS",
        "RESELECT COUNTRIES",
        "DOWNLOAD TREATED DATA",
        "BACK",
    ];

    loop {
        print_insight_level_2("The general view, bro:");
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
                let count = export_markers(&csv_builder, &config.map_export_file_name)?;
                print_insight_level_2(&format!(
                    "{} markers clustered into {} for the map widget",
                    count, config.map_export_file_name
                ));
            }
            Some(2) => {
                csv_builder = load_treated(config)?;
                prompt_country_filter(&mut csv_builder);
                render_metrics(&csv_builder);
            }
            Some(3) => {
                download_treated(&mut csv_builder, config)?;
            }
            Some(4) => break,
            _ => {
                print_insight_level_2("Dude, that option's a no-go. Give it another whirl.");
            }
        }
    }

    Ok(())
}

fn render_metrics(builder: &CsvBuilder) {
    println!();
    print_insight_level_2("Zomato: Food Delivery & Dining ... the brands on the platform:");
    print_metric(
        "Restaurants",
        &builder.count_unique("restaurant_id").to_string(),
    );
    print_metric("Countries", &builder.count_unique("country").to_string());
    print_metric("Cities", &builder.count_unique("city").to_string());
    print_metric(
        "Ratings made",
        &humanize_count(builder.get_sum("votes").unwrap_or(0.0)),
    );
    print_metric(
        "Cuisine types",
        &builder.count_unique("cuisines").to_string(),
    );
    println!();
}

/// Compacts a big count the way the dashboard's metric tiles did:
/// 4642263 -> "4.64M", trailing zeros trimmed.
fn humanize_count(value: f64) -> String {
    let suffixes = ["", "K", "M", "B", "T"];
    let mut scaled = value;
    let mut idx = 0;
    while scaled.abs() >= 1000.0 && idx < suffixes.len() - 1 {
        scaled /= 1000.0;
        idx += 1;
    }
    if idx == 0 {
        return trim_float(value);
    }
    let mut text = format!("{:.2}", scaled);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{}{}", text, suffixes[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_count_compacts_like_the_metric_tiles() {
        assert_eq!(humanize_count(523.0), "523");
        assert_eq!(humanize_count(4_642_263.0), "4.64M");
        assert_eq!(humanize_count(12_000.0), "12K");
        assert_eq!(humanize_count(1_500_000_000.0), "1.5B");
    }
}
