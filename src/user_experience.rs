// src/user_experience.rs
use crate::config::{edit_config, Config};
use crate::csv_utils::CsvBuilder;
use crate::dataset_manager::download_treated;
use crate::user_interaction::{
    determine_selection_as_list, get_user_input_level_2, print_insight, print_insight_level_2,
    print_list, print_list_level_2,
};
use std::path::Path;

pub fn handle_special_flag_without_builder(flag: &str, working_dir: &Path) -> bool {
    match flag {
        "@f" | "@flags" => {
            let flags = vec![
                "@b             : Inside a view => Back to the primary menu",
                "@c             : After action select => Cancel action",
                "@config        : Primary menu => Edit config",
                "@d / @download : Inside a view => Download the treated data (semicolon CSV)",
                "@f / @flags    : Anywhere => View all flags",
                "@q             : Anywhere => Quit zomatobro",
            ];

            print_insight("Serving your flags ...");
            print_list(&flags);
            println!();
            true
        }
        "@config" => {
            let _ = edit_config(working_dir);
            true
        }

        _ => false,
    }
}

pub fn handle_special_flag(flag: &str, builder: &mut CsvBuilder, config: &Config) -> bool {
    match flag {
        "@d" | "@download" => {
            if builder.has_data() {
                match download_treated(builder, config) {
                    Ok(_) => (),
                    Err(e) => print_insight_level_2(&format!("Download flopped, bro: {}", e)),
                }
            }
            true
        }
        _ => false,
    }
}

pub fn handle_back_flag(flag: &str) -> bool {
    match flag {
        "@b" => true,
        _ => false,
    }
}

pub fn handle_quit_flag(flag: &str) {
    if flag == "@q" {
        std::process::exit(0);
    }
}

pub fn handle_cancel_flag(flag: &str) -> bool {
    let trimmed = flag.trim();
    match trimmed {
        f if f == "@c" => true,
        f if f.starts_with("@c") => true,
        _ => false,
    }
}

/// The sidebar stand-in every view runs first: lists the countries present
/// in the treated table and keeps only the chosen ones. A blank choice
/// keeps all of them, like the dashboard's default-selected multiselect.
pub fn prompt_country_filter(builder: &mut CsvBuilder) -> Vec<String> {
    let countries = builder.get_unique("country");
    if countries.is_empty() {
        return countries;
    }

    print_insight_level_2("Choose the countries whose restaurants you want to see:");
    let country_refs: Vec<&str> = countries.iter().map(AsRef::as_ref).collect();
    print_list_level_2(&country_refs);

    let choice =
        get_user_input_level_2("Countries (comma-separated serials or names, blank for all): ");
    if handle_cancel_flag(&choice) {
        return countries;
    }
    let selection = determine_selection_as_list(&countries, &choice);
    builder.retain_where_in("country", &selection);
    selection
}
