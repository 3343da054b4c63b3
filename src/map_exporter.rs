// map_exporter.rs
use crate::csv_utils::CsvBuilder;
use serde_json::{json, Value};
use std::error::Error;
use std::fs::File;
use std::io::Write;

/// Builds the popup fragment the map widget shows per marker.
fn popup_html(
    name: &str,
    cost_for_two: &str,
    currency: &str,
    cuisine: &str,
    rating: &str,
) -> String {
    format!(
        "<p><strong>{}</strong></p><p>Price: {},00 ({}) for two<br />Cuisine: {}<br />Rating: {}/5.0",
        name, cost_for_two, currency, cuisine, rating
    )
}

/// Turns the filtered table into marker-cluster JSON for the external map
/// widget: one marker per row, colored by `color_name`, home icon, popup
/// with the restaurant's vitals. Returns how many markers were written.
/// A row with unparseable coordinates kills the export.
pub fn export_markers(builder: &CsvBuilder, file_path: &str) -> Result<usize, Box<dyn Error>> {
    let column = |name: &str| -> Result<usize, Box<dyn Error>> {
        builder
            .column_index(name)
            .ok_or_else(|| format!("column '{}' missing from treated table", name).into())
    };

    let lat_idx = column("latitude")?;
    let lon_idx = column("longitude")?;
    let name_idx = column("restaurant_name")?;
    let cost_idx = column("average_cost_for_two")?;
    let currency_idx = column("currency")?;
    let cuisine_idx = column("cuisines")?;
    let rating_idx = column("aggregate_rating")?;
    let color_idx = column("color_name")?;

    let mut markers: Vec<Value> = Vec::new();
    for row in builder.get_data() {
        let latitude: f64 = row[lat_idx]
            .parse()
            .map_err(|_| format!("bad latitude {:?}", row[lat_idx]))?;
        let longitude: f64 = row[lon_idx]
            .parse()
            .map_err(|_| format!("bad longitude {:?}", row[lon_idx]))?;

        markers.push(json!({
            "latitude": latitude,
            "longitude": longitude,
            "color": row[color_idx].as_str(),
            "icon": "home",
            "icon_prefix": "fa",
            "popup_html": popup_html(
                &row[name_idx],
                &row[cost_idx],
                &row[currency_idx],
                &row[cuisine_idx],
                &row[rating_idx],
            ),
        }));
    }

    let document = json!({
        "cluster": true,
        "markers": markers,
    });

    let mut file = File::create(file_path)?;
    file.write_all(serde_json::to_string_pretty(&document)?.as_bytes())?;

    Ok(document["markers"].as_array().map_or(0, |m| m.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treated_builder() -> CsvBuilder {
        let headers = vec![
            "restaurant_name",
            "latitude",
            "longitude",
            "average_cost_for_two",
            "currency",
            "cuisines",
            "aggregate_rating",
            "color_name",
        ];
        CsvBuilder::from_raw_data(
            headers.into_iter().map(String::from).collect(),
            vec![
                vec![
                    "Bros Burgers".to_string(),
                    "-15.8".to_string(),
                    "-47.8".to_string(),
                    "100".to_string(),
                    "Brazilian Real(R$)".to_string(),
                    "Burger".to_string(),
                    "4.4".to_string(),
                    "red".to_string(),
                ],
                vec![
                    "Sushi Ya".to_string(),
                    "32.7".to_string(),
                    "-96.7".to_string(),
                    "55".to_string(),
                    "Dollar($)".to_string(),
                    "Japanese".to_string(),
                    "4.9".to_string(),
                    "darkgreen".to_string(),
                ],
            ],
        )
    }

    #[test]
    fn exports_one_marker_per_row_with_popup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("map_markers.json");
        let count =
            export_markers(&treated_builder(), path.to_str().unwrap()).expect("export");
        assert_eq!(count, 2);

        let written = std::fs::read_to_string(&path).expect("read back");
        let document: Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(document["cluster"], json!(true));
        let markers = document["markers"].as_array().expect("markers array");
        assert_eq!(markers[0]["color"], json!("red"));
        assert_eq!(markers[0]["latitude"], json!(-15.8));
        let popup = markers[1]["popup_html"].as_str().expect("popup");
        assert!(popup.contains("<strong>Sushi Ya</strong>"));
        assert!(popup.contains("55,00 (Dollar($)) for two"));
        assert!(popup.contains("4.9/5.0"));
    }

    #[test]
    fn bad_coordinates_fail_the_export() {
        let mut builder = treated_builder();
        builder.map_column("latitude", |_| "not-a-latitude".to_string());
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("map_markers.json");
        assert!(export_markers(&builder, path.to_str().unwrap()).is_err());
    }
}
