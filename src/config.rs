// config.rs
use crate::user_interaction::{get_edited_user_config_input, print_insight_level_2};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub dataset_path: String,
    pub download_file_name: String,
    pub map_export_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: "datasets/zomato.csv".to_string(),
            download_file_name: "d.csv".to_string(),
            map_export_file_name: "map_markers.json".to_string(),
        }
    }
}

const CONFIG_FILE_NAME: &str = "zomato.config";

const CONFIG_DEFAULT_TEXT: &str = r#"{
  "dataset_path": "datasets/zomato.csv",
  "download_file_name": "d.csv",
  "map_export_file_name": "map_markers.json"
}

SYNTAX
======
{
  "dataset_path": "",          // where the raw Zomato CSV lives
  "download_file_name": "",    // semicolon-delimited treated-data export
  "map_export_file_name": ""   // marker JSON for the external map widget
}
"#;

fn config_path(working_dir: &Path) -> PathBuf {
    working_dir.join(CONFIG_FILE_NAME)
}

/// Loads `zomato.config` from the working directory, falling back to the
/// defaults when the file is absent or does not parse.
pub fn load_config(working_dir: &Path) -> Config {
    let path = config_path(working_dir);
    let mut text = String::new();
    if File::open(&path)
        .and_then(|mut f| f.read_to_string(&mut text))
        .is_err()
    {
        return Config::default();
    }
    let json_part = text.split("SYNTAX").next().unwrap_or_default();
    serde_json::from_str::<Config>(json_part).unwrap_or_default()
}

pub fn edit_config(working_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path(working_dir);

    // Step 1: Create a zomato.config if it does not already exist
    if !config_path.exists() {
        let mut file = File::create(&config_path)?;
        file.write_all(CONFIG_DEFAULT_TEXT.as_bytes())?;
    }

    // Step 2: Get zomato.config content into a variable
    let mut current_config_text = String::new();
    File::open(&config_path)?.read_to_string(&mut current_config_text)?;

    // Step 3: Open zomato.config in vim for editing
    let edited_config_text = get_edited_user_config_input(current_config_text);

    if let Some(json_part) = edited_config_text.split("SYNTAX").next() {
        match serde_json::from_str::<Value>(json_part) {
            Ok(_) => {
                print_insight_level_2("Config's all good, bro!");
            }
            Err(e) => {
                println!();
                print_insight_level_2(&format!("Whoops, hit a snag with that JSON: {}. Mind tweaking the config and trying again?", e));
                return Err(e.into());
            }
        }
    }

    // Step 4: Re-attach a fresh SYNTAX trailer and save
    let fresh_syntax = r#"SYNTAX
======
{
  "dataset_path": "",          // where the raw Zomato CSV lives
  "download_file_name": "",    // semicolon-delimited treated-data export
  "map_export_file_name": ""   // marker JSON for the external map widget
}
"#;

    let json_part = edited_config_text
        .split("SYNTAX")
        .next()
        .unwrap_or_default();
    let new_config_content = format!("{}\n\n{}", json_part.trim_end(), fresh_syntax);

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&config_path)?;
    file.write_all(new_config_content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = load_config(dir.path());
        assert_eq!(config.dataset_path, "datasets/zomato.csv");
        assert_eq!(config.download_file_name, "d.csv");
    }

    #[test]
    fn config_json_part_is_parsed_ignoring_syntax_trailer() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{
  "dataset_path": "elsewhere/zomato.csv",
  "download_file_name": "treated.csv",
  "map_export_file_name": "markers.json"
}

SYNTAX
======
{}
"#,
        )
        .expect("write config");
        let config = load_config(dir.path());
        assert_eq!(config.dataset_path, "elsewhere/zomato.csv");
        assert_eq!(config.download_file_name, "treated.csv");
        assert_eq!(config.map_export_file_name, "markers.json");
    }
}
