// user_interaction.rs
use fuzzywuzzy::fuzz;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vim_edit::vim_edit;

pub fn get_user_input(prompt: &str) -> String {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            println!("Failed to initialize editor: {:?}", err);
            return String::new();
        }
    };

    // ANSI escape codes for styling
    let bold_orange = "\x1b[1;38;5;208m";
    let reset = "\x1b[0m";

    let custom_prompt = format!("{}@BIGbro: {}{}{}", bold_orange, bold_orange, prompt, reset);

    loop {
        match rl.readline(&custom_prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                return line;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Input interrupted or end of file reached.");
                return String::new();
            }
            Err(err) => {
                println!("Error reading line: {:?}", err);
                return String::new();
            }
        }
    }
}

pub fn get_user_input_level_2(prompt: &str) -> String {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            println!("Failed to initialize editor: {:?}", err);
            return String::new();
        }
    };

    let bold_orange = "\x1b[0;38;5;208m";
    let reset = "\x1b[0m";

    let custom_prompt = format!(
        "  {}@LILbro: {}{}{}",
        bold_orange, bold_orange, prompt, reset
    );

    loop {
        match rl.readline(&custom_prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                return line;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Input interrupted or end of file reached.");
                return String::new();
            }
            Err(err) => {
                println!("Error reading line: {:?}", err);
                return String::new();
            }
        }
    }
}

/// Opens the current config text in vim and hands back whatever the user
/// saved.
pub fn get_edited_user_config_input(current_config: String) -> String {
    let edited = vim_edit(current_config);
    edited.trim().to_string()
}

pub fn print_list(options: &Vec<&str>) {
    // ANSI escape code for bold yellow font
    let bold_yellow = "\x1b[1;33m";
    let reset = "\x1b[0m";

    // Pad the serials so the list lines up
    let max_digits = options.len().to_string().len();

    for (index, option) in options.iter().enumerate() {
        let padded_index = format!("{:width$}:", index + 1, width = max_digits);
        println!("  {}{} {}{}", bold_yellow, padded_index, option, reset);
    }
}

pub fn print_list_level_2(options: &Vec<&str>) {
    let bold_yellow = "\x1b[0;33m";
    let reset = "\x1b[0m";

    let max_digits = options.len().to_string().len();

    for (index, option) in options.iter().enumerate() {
        let padded_index = format!("{:width$}:", index + 1, width = max_digits);
        println!("    {}{} {}{}", bold_yellow, padded_index, option, reset);
    }
}

pub fn determine_action_as_text(menu_options: &[&str], choice: &str) -> Option<String> {
    let choice = choice.to_lowercase();
    let mut selected_option: Option<String> = None;

    // Check for direct numeric input
    if let Ok(index) = choice.parse::<usize>() {
        if index > 0 && index <= menu_options.len() {
            selected_option = Some(menu_options[index - 1].to_string());
        }
    }

    // If no direct numeric input, use fuzzy matching
    if selected_option.is_none() {
        let (best_match_index, _) = menu_options
            .iter()
            .enumerate()
            .map(|(index, option)| (index + 1, fuzz::ratio(&choice, &option.to_lowercase())))
            .max_by_key(|&(_, score)| score)
            .unwrap_or((0, 0));

        if best_match_index > 0 && best_match_index <= menu_options.len() {
            selected_option = Some(menu_options[best_match_index - 1].to_string());
        }
    }

    selected_option
}

pub fn determine_action_as_number(menu_options: &[&str], choice: &str) -> Option<usize> {
    let choice = choice.to_lowercase();
    let mut selected_option = None;

    if let Ok(index) = choice.parse::<usize>() {
        if index > 0 && index <= menu_options.len() {
            selected_option = Some(index);
        }
    }

    if selected_option.is_none() {
        let (best_match_index, _) = menu_options
            .iter()
            .enumerate()
            .map(|(index, option)| (index + 1, fuzz::ratio(&choice, &option.to_lowercase())))
            .max_by_key(|&(_, score)| score)
            .unwrap_or((0, 0));

        if best_match_index > 0 && best_match_index <= menu_options.len() {
            selected_option = Some(best_match_index);
        }
    }

    selected_option
}

/// Resolves a comma-separated multiselect against `options`. Each token may
/// be a serial number or a name (fuzzy matched). A blank choice means the
/// whole list, which is the default-select-all behavior of the dashboard
/// sidebar this stands in for.
pub fn determine_selection_as_list(options: &[String], choice: &str) -> Vec<String> {
    if choice.trim().is_empty() {
        return options.to_vec();
    }

    let mut selected: Vec<String> = Vec::new();
    for token in choice.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }

        if let Ok(index) = token.parse::<usize>() {
            if index > 0 && index <= options.len() {
                let value = options[index - 1].clone();
                if !selected.contains(&value) {
                    selected.push(value);
                }
                continue;
            }
        }

        let best = options
            .iter()
            .map(|option| (option, fuzz::ratio(&token, &option.to_lowercase())))
            .max_by_key(|&(_, score)| score);

        if let Some((option, score)) = best {
            if score > 60 && !selected.contains(option) {
                selected.push(option.clone());
            }
        }
    }

    selected
}

/// Prints a message in the BIGbro voice.
pub fn print_insight(message: &str) {
    let bold_orange = "\x1b[1;38;5;208m";
    let reset = "\x1b[0m";

    println!("{}@BIGBro: {}{}", bold_orange, message, reset);
}

/// Prints a message in the LILbro voice.
pub fn print_insight_level_2(message: &str) {
    let bold_yellow = "\x1b[0;38;5;208m";
    let reset = "\x1b[0m";

    println!("  {}@LILBro: {}{}", bold_yellow, message, reset);
}

/// Prints one dashboard-style metric tile.
pub fn print_metric(label: &str, value: &str) {
    let bold_cyan = "\x1b[1;36m";
    let reset = "\x1b[0m";

    println!("  {}{:<24}{}{}", bold_cyan, label, reset, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec![
            "India".to_string(),
            "Brazil".to_string(),
            "Qatar".to_string(),
        ]
    }

    #[test]
    fn blank_multiselect_keeps_everything() {
        assert_eq!(determine_selection_as_list(&options(), "  "), options());
    }

    #[test]
    fn multiselect_resolves_serials_and_names() {
        let picked = determine_selection_as_list(&options(), "2, qatar");
        assert_eq!(picked, vec!["Brazil".to_string(), "Qatar".to_string()]);
    }

    #[test]
    fn multiselect_deduplicates() {
        let picked = determine_selection_as_list(&options(), "1, india, 1");
        assert_eq!(picked, vec!["India".to_string()]);
    }
}
