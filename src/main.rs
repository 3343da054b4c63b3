mod city_viewer;
mod config;
mod country_viewer;
mod csv_utils;
mod cuisine_viewer;
mod dataset_manager;
mod dataset_treater;
mod general_viewer;
mod map_exporter;
mod user_experience;
mod user_interaction;

use crate::city_viewer::handle_city_view;
use crate::config::{edit_config, load_config};
use crate::country_viewer::handle_country_view;
use crate::cuisine_viewer::handle_cuisine_view;
use crate::dataset_manager::handle_download;
use crate::general_viewer::handle_general_view;
use crate::user_experience::{handle_quit_flag, handle_special_flag_without_builder};
use crate::user_interaction::{determine_action_as_text, get_user_input, print_insight, print_list};
use std::env;

const BRO_VERSION: &str = "1.1.4";

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--version") {
        print_insight(BRO_VERSION);
        std::process::exit(0);
    }

    let working_dir = env::current_dir().expect("Unable to determine working directory");

    println!(
        r#"

 .----------------.  .----------------.  .----------------.  .----------------.  .----------------.  .----------------.
| .--------------. || .--------------. || .--------------. || .--------------. || .--------------. || .--------------. |
| |   ________   | || |     ____     | || | ____    ____ | || |      __      | || |  _________   | || |     ____     | |
| |  |  __   _|  | || |   .'    `.   | || ||_   \  /   _|| || |     /  \     | || | |  _   _  |  | || |   .'    `.   | |
| |  |_/  / /    | || |  /  .--.  \  | || |  |   \/   |  | || |    / /\ \    | || | |_/ | | \_|  | || |  /  .--.  \  | |
| |     .'.' _   | || |  | |    | |  | || |  | |\  /| |  | || |   / ____ \   | || |     | |      | || |  | |    | |  | |
| |   _/ /__/ |  | || |  \  `--'  /  | || | _| |_\/_| |_ | || | _/ /    \ \_ | || |    _| |_     | || |  \  `--'  /  | |
| |  |________|  | || |   `.____.'   | || ||_____||_____|| || ||____|  |____|| || |   |_____|    | || |   `.____.'   | |
| |              | || |              | || |              | || |              | || |              | || |              | |
| '--------------' || '--------------' || '--------------' || '--------------' || '--------------' || '--------------' |
 '----------------'  '----------------'  '----------------'  '----------------'  '----------------'  '----------------'

                          Zomato: Food Delivery & Dining ........ For the love of Food

"#
    );

    let menu_options = vec![
        "GENERAL VIEW",
        "COUNTRIES VIEW",
        "CITIES VIEW",
        "CUISINES VIEW",
        "DOWNLOAD TREATED DATA",
        "CONFIG",
    ];

    loop {
        // Re-read each round so a @config edit lands on the next view
        let config = load_config(&working_dir);

        print_list(&menu_options);
        let choice = get_user_input("Your move, bro: ");
        let _ = handle_quit_flag(&choice);

        if handle_special_flag_without_builder(&choice, &working_dir) {
            continue;
        }

        let selected_option = determine_action_as_text(&menu_options, &choice);

        let outcome = match selected_option {
            Some(ref action) if action == "GENERAL VIEW" => handle_general_view(&config).await,
            Some(ref action) if action == "COUNTRIES VIEW" => handle_country_view(&config).await,
            Some(ref action) if action == "CITIES VIEW" => handle_city_view(&config).await,
            Some(ref action) if action == "CUISINES VIEW" => handle_cuisine_view(&config).await,
            Some(ref action) if action == "DOWNLOAD TREATED DATA" => handle_download(&config).await,
            Some(ref action) if action == "CONFIG" => edit_config(&working_dir),
            _ => {
                print_insight("Dude, that action's a no-go. Give it another whirl, alright?");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            print_insight(&format!("That view hit a snag, bro: {}", e));
        }
    }
}
