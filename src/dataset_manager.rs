// dataset_manager.rs
use crate::config::Config;
use crate::csv_utils::CsvBuilder;
use crate::dataset_treater::treat;
use crate::user_experience::prompt_country_filter;
use crate::user_interaction::{print_insight, print_insight_level_2};
use chrono::{DateTime, Local};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Reads the raw dataset from the configured path. Missing or broken
/// files are an error right here; no view gets to render over a half-read
/// table.
pub fn load_raw(config: &Config) -> Result<CsvBuilder, Box<dyn Error>> {
    let builder = CsvBuilder::from_csv(&config.dataset_path);

    if let Some(e) = builder.has_error() {
        return Err(format!("Could not read {}: {}", config.dataset_path, e).into());
    }
    if !builder.has_data() {
        return Err(format!("{} came up empty, bro", config.dataset_path).into());
    }

    if let Ok(modified) = fs::metadata(Path::new(&config.dataset_path)).and_then(|m| m.modified())
    {
        let stamp: DateTime<Local> = modified.into();
        print_insight_level_2(&format!(
            "Loaded {} raw rows from {} (last modified {})",
            builder.row_count(),
            config.dataset_path,
            stamp.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(builder)
}

/// Fresh load plus the full treatment. Every view visit starts here, so
/// no state leaks between views.
pub fn load_treated(config: &Config) -> Result<CsvBuilder, Box<dyn Error>> {
    let mut builder = load_raw(config)?;
    treat(&mut builder);
    print_insight_level_2(&format!("{} rows after treatment", builder.row_count()));
    Ok(builder)
}

/// Writes the current (filtered) table as the semicolon-delimited
/// treated-data download.
pub fn download_treated(builder: &mut CsvBuilder, config: &Config) -> Result<(), Box<dyn Error>> {
    builder.save_with_delimiter(&config.download_file_name, b';')?;
    print_insight_level_2(&format!(
        "Treated data ({} rows) downloaded at {}",
        builder.row_count(),
        config.download_file_name
    ));
    Ok(())
}

/// The primary-menu download entry: load, treat, filter, save.
pub async fn handle_download(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut csv_builder = load_treated(config)?;
    prompt_country_filter(&mut csv_builder);
    download_treated(&mut csv_builder, config)?;
    print_insight("Treated and bagged, bro.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RAW_CSV: &str = "\
Restaurant ID,Restaurant Name,Country Code,City,Cuisines,Average Cost for two,Currency,Longitude,Latitude,Price range,Aggregate rating,Rating color,Votes
95314,Sushi Ya,216,Dallas,\"Japanese, Sushi\",55,Dollar($),-96.7,32.7,3,4.9,3F7E00,1203
7402935,Bros Burgers,30,Brasilia,\"Burger, Bar Food\",100,Brazilian Real(R$),-47.8,-15.8,2,4.4,FFBA00,523
18445,Casa da Feijoada,30,Rio de Janeiro,Mineira,120,Brazilian Real(R$),-43.1,-22.9,4,3.8,5BA829,305
";

    fn config_for(dir: &Path, dataset: &str) -> Config {
        Config {
            dataset_path: dataset.to_string(),
            download_file_name: dir
                .join("d.csv")
                .to_str()
                .expect("utf-8 path")
                .to_string(),
            map_export_file_name: dir
                .join("map_markers.json")
                .to_str()
                .expect("utf-8 path")
                .to_string(),
        }
    }

    fn write_dataset(dir: &Path) -> String {
        let path = dir.join("zomato.csv");
        let mut file = std::fs::File::create(&path).expect("create dataset");
        file.write_all(RAW_CSV.as_bytes()).expect("write dataset");
        path.to_str().expect("utf-8 path").to_string()
    }

    #[test]
    fn load_treated_runs_the_whole_pipeline_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_for(dir.path(), &write_dataset(dir.path()));

        let builder = load_treated(&config).expect("treated load");
        // Mineira row excluded, the rest treated and sorted by id
        assert_eq!(builder.row_count(), 2);
        assert_eq!(builder.get_cell(0, "restaurant_name"), Some("Sushi Ya"));
        assert_eq!(builder.get_cell(0, "country"), Some("United States of America"));
        assert_eq!(builder.get_cell(1, "cuisines"), Some("Burger"));
        assert_eq!(builder.get_cell(1, "price_type"), Some("normal"));
    }

    #[test]
    fn load_raw_fails_fast_on_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_for(dir.path(), "definitely/not/here.csv");
        assert!(load_raw(&config).is_err());
    }

    #[test]
    fn download_is_semicolon_delimited() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_for(dir.path(), &write_dataset(dir.path()));

        let mut builder = load_treated(&config).expect("treated load");
        download_treated(&mut builder, &config).expect("download");

        let written = std::fs::read_to_string(&config.download_file_name).expect("read back");
        let header = written.lines().next().expect("header line");
        assert!(header.starts_with("restaurant_id;restaurant_name;country_code"));
        assert_eq!(written.lines().count(), 3);
    }
}
