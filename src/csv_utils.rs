// csv_utils.rs
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs::File;

use regex::RegexBuilder;

/// A lean, in-memory CSV table. Headers and cells are plain strings;
/// numeric interpretation happens on demand inside the operations that
/// need it.
pub struct CsvBuilder {
    headers: Vec<String>,
    data: Vec<Vec<String>>,
    error: Option<Box<dyn Error>>,
}

impl CsvBuilder {
    /// Creates a new, empty `CsvBuilder`.
    pub fn new() -> Self {
        CsvBuilder {
            headers: Vec::new(),
            data: Vec::new(),
            error: None,
        }
    }

    /// Reads a CSV file into a `CsvBuilder`. On failure the builder is
    /// returned empty with its `error` set, so callers can decide whether
    /// to bail.
    pub fn from_csv(file_path: &str) -> Self {
        let mut builder = CsvBuilder::new();

        match File::open(file_path) {
            Ok(file) => {
                let mut rdr = csv::Reader::from_reader(file);

                if let Ok(hdrs) = rdr.headers() {
                    builder.headers = hdrs.iter().map(String::from).collect();
                }

                for result in rdr.records() {
                    match result {
                        Ok(record) => builder.data.push(record.iter().map(String::from).collect()),
                        Err(e) => {
                            builder.error = Some(Box::new(e));
                            break;
                        }
                    }
                }
            }
            Err(e) => builder.error = Some(Box::new(e)),
        }

        builder
    }

    /// Builds directly from headers and rows.
    pub fn from_raw_data(headers: Vec<String>, data: Vec<Vec<String>>) -> Self {
        CsvBuilder {
            headers,
            data,
            error: None,
        }
    }

    /// Deep copy, dropping any carried error.
    pub fn from_copy(&self) -> Self {
        CsvBuilder {
            headers: self.headers.clone(),
            data: self.data.clone(),
            error: None,
        }
    }

    /// Writes the table as a comma-delimited CSV.
    pub fn save_as(&mut self, new_file_path: &str) -> Result<&mut Self, Box<dyn Error>> {
        self.save_with_delimiter(new_file_path, b',')
    }

    /// Writes the table with an arbitrary single-byte delimiter. The
    /// treated-data download uses `;`.
    pub fn save_with_delimiter(
        &mut self,
        new_file_path: &str,
        delimiter: u8,
    ) -> Result<&mut Self, Box<dyn Error>> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(new_file_path)?;
        wtr.write_record(&self.headers)?;
        for row in &self.data {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(self)
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty() || !self.headers.is_empty()
    }

    pub fn has_error(&self) -> Option<&Box<dyn Error>> {
        self.error.as_ref()
    }

    pub fn get_headers(&self) -> &[String] {
        &self.headers
    }

    pub fn get_data(&self) -> &Vec<Vec<String>> {
        &self.data
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn first_row(&self) -> Option<&Vec<String>> {
        self.data.first()
    }

    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column_name)
    }

    /// Replaces the header row wholesale. Cell data is left untouched.
    pub fn set_header(&mut self, header: Vec<String>) -> &mut Self {
        self.headers = header;
        self
    }

    /// Returns the cell at (row, column name), if both exist.
    pub fn get_cell(&self, row_index: usize, column_name: &str) -> Option<&str> {
        let idx = self.column_index(column_name)?;
        self.data.get(row_index)?.get(idx).map(|s| s.as_str())
    }

    /// Appends a derived column. `derive` sees each row as it currently
    /// stands; short rows are padded beforehand so indices line up.
    pub fn append_derived_column(
        &mut self,
        column_name: &str,
        derive: impl Fn(&[String]) -> String,
    ) -> &mut Self {
        let width = self.headers.len();
        for row in &mut self.data {
            while row.len() < width {
                row.push(String::new());
            }
        }
        let new_cells: Vec<String> = self.data.iter().map(|row| derive(row)).collect();
        self.headers.push(column_name.to_string());
        for (row, cell) in self.data.iter_mut().zip(new_cells) {
            row.push(cell);
        }
        self
    }

    /// Rewrites every cell of one column through `map`.
    pub fn map_column(&mut self, column_name: &str, map: impl Fn(&str) -> String) -> &mut Self {
        if let Some(idx) = self.column_index(column_name) {
            for row in &mut self.data {
                if let Some(cell) = row.get_mut(idx) {
                    *cell = map(cell);
                }
            }
        }
        self
    }

    /// Drops every row that has at least one empty cell. A row shorter
    /// than the header counts as having empty cells.
    pub fn drop_rows_with_empty_cells(&mut self) -> &mut Self {
        let width = self.headers.len();
        self.data
            .retain(|row| row.len() == width && row.iter().all(|cell| !cell.trim().is_empty()));
        self
    }

    /// Drops every column that has at least one empty cell. After the row
    /// sweep this only fires when a column emptied out across the board.
    pub fn drop_columns_with_empty_cells(&mut self) -> &mut Self {
        let mut keep: Vec<bool> = vec![true; self.headers.len()];
        for row in &self.data {
            for (i, flag) in keep.iter_mut().enumerate() {
                match row.get(i) {
                    Some(cell) if !cell.trim().is_empty() => {}
                    _ => *flag = false,
                }
            }
        }
        if self.data.is_empty() {
            return self;
        }
        self.headers = self
            .headers
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(h, _)| h.clone())
            .collect();
        for row in &mut self.data {
            let mut i = 0;
            row.retain(|_| {
                let k = keep.get(i).copied().unwrap_or(false);
                i += 1;
                k
            });
        }
        self
    }

    /// Removes exact duplicate rows, keeping the first occurrence.
    pub fn remove_duplicates(&mut self) -> &mut Self {
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        self.data.retain(|row| seen.insert(row.clone()));
        self
    }

    /// Multi-key sort. Each order is ("column", "ASC"/"DESC"); cells that
    /// parse as f64 on both sides compare numerically, everything else
    /// compares as strings. The sort is stable.
    pub fn cascade_sort(&mut self, orders: Vec<(String, String)>) -> &mut Self {
        let column_indices: HashMap<&str, usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        self.data.sort_by(|a, b| {
            let mut cmp = std::cmp::Ordering::Equal;
            for (column_name, order) in &orders {
                if let Some(&index) = column_indices.get(column_name.as_str()) {
                    let a_val = a.get(index).map(|s| s.as_str()).unwrap_or("");
                    let b_val = b.get(index).map(|s| s.as_str()).unwrap_or("");

                    cmp = if let (Ok(a_num), Ok(b_num)) =
                        (a_val.parse::<f64>(), b_val.parse::<f64>())
                    {
                        if order == "ASC" {
                            a_num.partial_cmp(&b_num).unwrap_or(std::cmp::Ordering::Equal)
                        } else {
                            b_num.partial_cmp(&a_num).unwrap_or(std::cmp::Ordering::Equal)
                        }
                    } else if order == "ASC" {
                        a_val.cmp(b_val)
                    } else {
                        b_val.cmp(a_val)
                    };

                    if cmp != std::cmp::Ordering::Equal {
                        break;
                    }
                }
            }
            cmp
        });

        self
    }

    /// Keeps only the named columns, in the given order.
    pub fn retain_columns(&mut self, columns_to_retain: Vec<&str>) -> &mut Self {
        let indices: Vec<usize> = columns_to_retain
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();
        self.headers = indices.iter().map(|&i| self.headers[i].clone()).collect();
        self.data = self
            .data
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        self
    }

    /// Keeps rows whose cell in `column_name` is one of `values`.
    pub fn retain_where_in(&mut self, column_name: &str, values: &[String]) -> &mut Self {
        if let Some(idx) = self.column_index(column_name) {
            let allowed: HashSet<&str> = values.iter().map(|v| v.as_str()).collect();
            self.data
                .retain(|row| row.get(idx).map_or(false, |cell| allowed.contains(cell.as_str())));
        }
        self
    }

    /// Drops rows whose cell in `column_name` is one of `values`.
    pub fn drop_where_in(&mut self, column_name: &str, values: &[&str]) -> &mut Self {
        if let Some(idx) = self.column_index(column_name) {
            let banned: HashSet<&str> = values.iter().copied().collect();
            self.data
                .retain(|row| row.get(idx).map_or(true, |cell| !banned.contains(cell.as_str())));
        }
        self
    }

    /// Numeric row filter. Supported operators: ">=", "<=", ">", "<", "==".
    /// Rows whose cell does not parse are dropped.
    pub fn retain_where_numeric(&mut self, column_name: &str, operator: &str, value: f64) -> &mut Self {
        if let Some(idx) = self.column_index(column_name) {
            self.data.retain(|row| {
                let cell = match row.get(idx).and_then(|c| c.parse::<f64>().ok()) {
                    Some(n) => n,
                    None => return false,
                };
                match operator {
                    ">=" => cell >= value,
                    "<=" => cell <= value,
                    ">" => cell > value,
                    "<" => cell < value,
                    "==" => cell == value,
                    _ => false,
                }
            });
        }
        self
    }

    /// Substring row filter, optionally case-insensitive (regex-escaped).
    pub fn retain_where_contains(
        &mut self,
        column_name: &str,
        needle: &str,
        case_insensitive: bool,
    ) -> &mut Self {
        if let Some(idx) = self.column_index(column_name) {
            let re = RegexBuilder::new(&regex::escape(needle))
                .case_insensitive(case_insensitive)
                .build()
                .expect("escaped needle is always a valid pattern");
            self.data
                .retain(|row| row.get(idx).map_or(false, |cell| re.is_match(cell)));
        }
        self
    }

    /// Truncates the table to its first `limit` rows.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        self.data.truncate(limit);
        self
    }

    /// Unique values of a column, in first-seen order.
    pub fn get_unique(&self, column_name: &str) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut uniques: Vec<String> = Vec::new();
        if let Some(idx) = self.column_index(column_name) {
            for row in &self.data {
                if let Some(value) = row.get(idx) {
                    if seen.insert(value.clone()) {
                        uniques.push(value.clone());
                    }
                }
            }
        }
        uniques
    }

    pub fn count_unique(&self, column_name: &str) -> usize {
        self.get_unique(column_name).len()
    }

    /// Sum of a column's parseable cells. None when the column is missing.
    pub fn get_sum(&self, column_name: &str) -> Option<f64> {
        let idx = self.column_index(column_name)?;
        Some(
            self.data
                .iter()
                .filter_map(|row| row.get(idx)?.parse::<f64>().ok())
                .sum(),
        )
    }

    /// Mean of a column's parseable cells. None when the column is missing
    /// or nothing parses.
    pub fn get_mean(&self, column_name: &str) -> Option<f64> {
        let idx = self.column_index(column_name)?;
        let values: Vec<f64> = self
            .data
            .iter()
            .filter_map(|row| row.get(idx)?.parse::<f64>().ok())
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn grouped_rows(&self, group_columns: &[&str]) -> (Vec<Vec<String>>, HashMap<Vec<String>, Vec<usize>>) {
        let indices: Vec<usize> = group_columns
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();
        let mut order: Vec<Vec<String>> = Vec::new();
        let mut groups: HashMap<Vec<String>, Vec<usize>> = HashMap::new();
        for (row_idx, row) in self.data.iter().enumerate() {
            let key: Vec<String> = indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect();
            match groups.get_mut(&key) {
                Some(members) => members.push(row_idx),
                None => {
                    order.push(key.clone());
                    groups.insert(key, vec![row_idx]);
                }
            }
        }
        (order, groups)
    }

    /// Group-by row count. The result table holds the group columns plus
    /// `out_column`, groups in first-seen order.
    pub fn group_count(&self, group_columns: Vec<&str>, out_column: &str) -> CsvBuilder {
        let (order, groups) = self.grouped_rows(&group_columns);
        let mut headers: Vec<String> = group_columns.iter().map(|c| c.to_string()).collect();
        headers.push(out_column.to_string());
        let data = order
            .into_iter()
            .map(|key| {
                let count = groups[&key].len();
                let mut row = key;
                row.push(count.to_string());
                row
            })
            .collect();
        CsvBuilder::from_raw_data(headers, data)
    }

    /// Group-by distinct count over `value_column`.
    pub fn group_count_unique(
        &self,
        group_columns: Vec<&str>,
        value_column: &str,
        out_column: &str,
    ) -> CsvBuilder {
        let value_idx = self
            .column_index(value_column)
            .expect("value column not found");
        let (order, groups) = self.grouped_rows(&group_columns);
        let mut headers: Vec<String> = group_columns.iter().map(|c| c.to_string()).collect();
        headers.push(out_column.to_string());
        let data = order
            .into_iter()
            .map(|key| {
                let uniques: HashSet<&str> = groups[&key]
                    .iter()
                    .filter_map(|&i| self.data[i].get(value_idx).map(|s| s.as_str()))
                    .collect();
                let mut row = key;
                row.push(uniques.len().to_string());
                row
            })
            .collect();
        CsvBuilder::from_raw_data(headers, data)
    }

    /// Group-by mean over `value_column`, rounded to `decimals` places.
    pub fn group_mean(
        &self,
        group_columns: Vec<&str>,
        value_column: &str,
        out_column: &str,
        decimals: u32,
    ) -> CsvBuilder {
        let value_idx = self
            .column_index(value_column)
            .expect("value column not found");
        let factor = 10f64.powi(decimals as i32);
        let (order, groups) = self.grouped_rows(&group_columns);
        let mut headers: Vec<String> = group_columns.iter().map(|c| c.to_string()).collect();
        headers.push(out_column.to_string());
        let data = order
            .into_iter()
            .map(|key| {
                let values: Vec<f64> = groups[&key]
                    .iter()
                    .filter_map(|&i| self.data[i].get(value_idx)?.parse::<f64>().ok())
                    .collect();
                let mean = if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                };
                let mut row = key;
                row.push(format!("{}", (mean * factor).round() / factor));
                row
            })
            .collect();
        CsvBuilder::from_raw_data(headers, data)
    }

    /// Prints the table with up to 5 rows from each end, cells truncated
    /// at 45 chars, and wide tables collapsed around a column ellipsis.
    pub fn print_table(&mut self) -> &mut Self {
        let show_rows = 5;
        let max_cell_width = 45;
        let total_rows = self.data.len();

        let visible_columns: Vec<usize> = if self.headers.len() > 8 {
            (0..4).chain(self.headers.len() - 3..self.headers.len()).collect()
        } else {
            (0..self.headers.len()).collect()
        };
        let collapsed = visible_columns.len() < self.headers.len();

        let mut widths: Vec<usize> = visible_columns
            .iter()
            .map(|&i| self.headers[i].len() + 1)
            .collect();
        for row in self
            .data
            .iter()
            .take(show_rows)
            .chain(self.data.iter().skip(total_rows.saturating_sub(show_rows)))
        {
            for (slot, &col) in visible_columns.iter().enumerate() {
                let len = row.get(col).map(|c| c.len()).unwrap_or(0);
                widths[slot] = widths[slot].max(len).min(max_cell_width);
            }
        }

        let format_cell =
            |s: &str, width: usize| -> String { format!("{:width$.width$}", s, width = width) };

        let header_line = visible_columns
            .iter()
            .zip(&widths)
            .map(|(&col, &w)| format_cell(&self.headers[col], w))
            .collect::<Vec<String>>()
            .join("|");
        if collapsed {
            let omitted = self.headers.len() - visible_columns.len();
            println!("\n|{}|  <<+{} cols>>", header_line, omitted);
        } else {
            println!("\n|{}|", header_line);
        }
        println!("{}", "-".repeat(header_line.len() + 2));

        let print_row = |row: &Vec<String>| {
            let line = visible_columns
                .iter()
                .zip(&widths)
                .map(|(&col, &w)| format_cell(row.get(col).map(|c| c.as_str()).unwrap_or(""), w))
                .collect::<Vec<String>>()
                .join("|");
            println!("|{}|", line);
        };

        for row in self.data.iter().take(show_rows) {
            print_row(row);
        }
        if total_rows > 2 * show_rows {
            let omitted = total_rows - 2 * show_rows;
            let row_word = if omitted == 1 { "row" } else { "rows" };
            println!("<<+{} {}>>", omitted, row_word);
            for row in self.data.iter().skip(total_rows - show_rows) {
                print_row(row);
            }
        } else {
            for row in self.data.iter().skip(show_rows) {
                print_row(row);
            }
        }
        println!("Total rows: {}", total_rows);

        self
    }

    /// Prints a horizontal bar chart of `value_column` per `label_column`
    /// row, bars scaled to a 60-char lane, with a small stats footer.
    pub fn print_bar_chart(&mut self, label_column: &str, value_column: &str) -> &mut Self {
        let label_idx = self
            .column_index(label_column)
            .expect("label column not found");
        let value_idx = self
            .column_index(value_column)
            .expect("value column not found");

        let bars: Vec<(String, f64)> = self
            .data
            .iter()
            .filter_map(|row| {
                let label = row.get(label_idx)?.clone();
                let value = row.get(value_idx)?.parse::<f64>().ok()?;
                Some((label, value))
            })
            .collect();

        if bars.is_empty() {
            println!("  (no plottable rows for '{}' x '{}')", label_column, value_column);
            return self;
        }

        let lane_width = 60usize;
        let label_width = bars.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let max_value = bars.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        let mean = bars.iter().map(|(_, v)| *v).sum::<f64>() / bars.len() as f64;

        for (label, value) in &bars {
            let filled = if max_value > 0.0 {
                ((value / max_value) * lane_width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat('*').take(filled.min(lane_width)).collect();
            println!(
                "  {:label_width$} |{:lane_width$}| {}",
                label,
                bar,
                trim_float(*value),
                label_width = label_width,
                lane_width = lane_width,
            );
        }
        println!("\n  Bars: {}", bars.len());
        println!("  Max: {}", trim_float(max_value));
        println!("  Mean: {:.2}", mean);

        self
    }
}

/// Formats a float without trailing fractional zeros, two decimals max.
pub fn trim_float(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn builder_from(headers: &[&str], rows: &[&[&str]]) -> CsvBuilder {
        CsvBuilder::from_raw_data(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn from_csv_reads_headers_and_rows() {
        let mut tmp = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        writeln!(tmp, "a,b").unwrap();
        writeln!(tmp, "1,x").unwrap();
        writeln!(tmp, "2,y").unwrap();
        let builder = CsvBuilder::from_csv(tmp.path().to_str().unwrap());
        assert_eq!(builder.get_headers(), &["a".to_string(), "b".to_string()]);
        assert_eq!(builder.row_count(), 2);
        assert_eq!(builder.get_cell(1, "b"), Some("y"));
    }

    #[test]
    fn from_csv_missing_file_sets_error() {
        let builder = CsvBuilder::from_csv("no_such_file_anywhere.csv");
        assert!(builder.has_error().is_some());
        assert!(!builder.has_data());
    }

    #[test]
    fn save_as_writes_plain_csv() {
        let mut builder = builder_from(&["a", "b"], &[&["1", "x"]]);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        builder.save_as(path.to_str().unwrap()).expect("save");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "a,b\n1,x\n");
    }

    #[test]
    fn save_with_semicolon_delimiter() {
        let mut builder = builder_from(&["a", "b"], &[&["1", "x"], &["2", "y"]]);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("d.csv");
        builder
            .save_with_delimiter(path.to_str().unwrap(), b';')
            .expect("save");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "a;b\n1;x\n2;y\n");
    }

    #[test]
    fn drop_rows_with_empty_cells_also_drops_short_rows() {
        let mut builder = CsvBuilder::from_raw_data(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["1".to_string(), "x".to_string()],
                vec!["2".to_string(), "".to_string()],
                vec!["3".to_string()],
            ],
        );
        builder.drop_rows_with_empty_cells();
        assert_eq!(builder.row_count(), 1);
        assert_eq!(builder.get_cell(0, "a"), Some("1"));
    }

    #[test]
    fn drop_columns_with_empty_cells_removes_hollow_column() {
        let mut builder = builder_from(
            &["a", "hollow", "b"],
            &[&["1", "", "x"], &["2", "", "y"]],
        );
        builder.drop_columns_with_empty_cells();
        assert_eq!(builder.get_headers(), &["a".to_string(), "b".to_string()]);
        assert_eq!(builder.get_cell(1, "b"), Some("y"));
    }

    #[test]
    fn remove_duplicates_keeps_first() {
        let mut builder = builder_from(
            &["a", "b"],
            &[&["1", "x"], &["1", "x"], &["2", "y"], &["1", "x"]],
        );
        builder.remove_duplicates();
        assert_eq!(builder.row_count(), 2);
    }

    #[test]
    fn cascade_sort_is_numeric_aware() {
        let mut builder = builder_from(&["id"], &[&["10"], &["9"], &["100"]]);
        builder.cascade_sort(vec![("id".to_string(), "ASC".to_string())]);
        let ids: Vec<&str> = (0..3).map(|i| builder.get_cell(i, "id").unwrap()).collect();
        assert_eq!(ids, vec!["9", "10", "100"]);
    }

    #[test]
    fn cascade_sort_desc_then_asc_tiebreak() {
        let mut builder = builder_from(
            &["rating", "id"],
            &[&["4.9", "7"], &["4.9", "3"], &["4.5", "1"]],
        );
        builder.cascade_sort(vec![
            ("rating".to_string(), "DESC".to_string()),
            ("id".to_string(), "ASC".to_string()),
        ]);
        assert_eq!(builder.get_cell(0, "id"), Some("3"));
        assert_eq!(builder.get_cell(1, "id"), Some("7"));
        assert_eq!(builder.get_cell(2, "id"), Some("1"));
    }

    #[test]
    fn retain_and_drop_where_in() {
        let mut builder = builder_from(
            &["country"],
            &[&["Brazil"], &["India"], &["Qatar"], &["India"]],
        );
        builder.retain_where_in("country", &["India".to_string(), "Qatar".to_string()]);
        assert_eq!(builder.row_count(), 3);
        builder.drop_where_in("country", &["Qatar"]);
        assert_eq!(builder.row_count(), 2);
        assert!(builder.get_unique("country") == vec!["India".to_string()]);
    }

    #[test]
    fn retain_where_contains_is_case_insensitive() {
        let mut builder = builder_from(
            &["cuisines"],
            &[&["Italian"], &["north ITALIAN fusion"], &["BBQ"]],
        );
        builder.retain_where_contains("cuisines", "italian", true);
        assert_eq!(builder.row_count(), 2);
    }

    #[test]
    fn group_count_unique_and_mean() {
        let builder = builder_from(
            &["country", "city", "votes"],
            &[
                &["India", "Delhi", "10"],
                &["India", "Delhi", "20"],
                &["India", "Pune", "30"],
                &["Qatar", "Doha", "40"],
            ],
        );
        let cities = builder.group_count_unique(vec!["country"], "city", "city_count");
        assert_eq!(cities.get_cell(0, "city_count"), Some("2"));
        assert_eq!(cities.get_cell(1, "city_count"), Some("1"));

        let means = builder.group_mean(vec!["country"], "votes", "votes_mean", 2);
        assert_eq!(means.get_cell(0, "votes_mean"), Some("20"));
        assert_eq!(means.get_cell(1, "votes_mean"), Some("40"));
    }

    #[test]
    fn group_count_counts_rows_per_group() {
        let builder = builder_from(
            &["city", "country"],
            &[
                &["Delhi", "India"],
                &["Delhi", "India"],
                &["Doha", "Qatar"],
            ],
        );
        let counts = builder.group_count(vec!["city", "country"], "restaurant_count");
        assert_eq!(counts.row_count(), 2);
        assert_eq!(counts.get_cell(0, "restaurant_count"), Some("2"));
    }

    #[test]
    fn sums_means_and_uniques() {
        let builder = builder_from(
            &["votes", "city"],
            &[&["10", "Delhi"], &["15", "Delhi"], &["5", "Doha"]],
        );
        assert_eq!(builder.get_sum("votes"), Some(30.0));
        assert_eq!(builder.get_mean("votes"), Some(10.0));
        assert_eq!(builder.count_unique("city"), 2);
        assert_eq!(builder.get_sum("nope"), None);
    }

    #[test]
    fn trim_float_drops_trailing_zeros() {
        assert_eq!(trim_float(4.0), "4");
        assert_eq!(trim_float(4.5), "4.50");
        assert_eq!(trim_float(4.125), "4.13");
    }
}
