use std::fs;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use crate::errors::SheetError;

/// A sheet of text cells kept in a CSV file.
///
/// Rows and columns are 1-based, as in a spreadsheet. Cells outside the stored area
/// read as empty, and writing outside it grows the sheet. Every line of the file is a
/// row, a blank line is read as an empty row.
pub struct Sheet {
    path: PathBuf,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Opens a sheet from the given CSV file, rows may be of different length.
    ///
    /// The csv reader skips blank lines, so each record is placed on the row it starts on
    /// by looking at what the reader consumed before it, and skipped lines become empty
    /// rows. Line breaks inside quoted fields keep the cell on one row.
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the sheet file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Sheet, SheetError> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut record = StringRecord::new();
        let mut consumed: usize = 0;
        let mut line: usize = 1;
        let mut next_line: usize = 1;

        while reader.read_record(&mut record)? {
            let end = reader.position().byte() as usize;
            let chunk = &content[consumed..end];
            let skipped = chunk.len() - chunk.trim_start_matches(['\r', '\n']).len();
            let start_line = line + chunk[..skipped].matches('\n').count();

            for _ in next_line..start_line {
                rows.push(Vec::new());
            }

            let breaks = record.iter().map(|f| f.matches('\n').count()).sum::<usize>();
            next_line = start_line + breaks + 1;
            line += chunk.matches('\n').count();
            consumed = end;

            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Sheet { path, rows })
    }

    /// Saves the sheet back to its file, every row padded to the last column
    ///
    pub fn save(&self) -> Result<(), SheetError> {
        let last_column = self.last_column();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        for row in &self.rows[..self.last_row()] {
            let mut record = row.clone();
            record.resize(last_column.max(1), String::new());
            writer.write_record(&record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Returns the last row holding any non-empty cell, 0 for an empty sheet
    pub fn last_row(&self) -> usize {
        self.rows
            .iter()
            .rposition(|r| r.iter().any(|c| !c.is_empty()))
            .map_or(0, |i| i + 1)
    }

    /// Returns the last column holding any non-empty cell, 0 for an empty sheet
    pub fn last_column(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|r| r.iter().rposition(|c| !c.is_empty()))
            .max()
            .map_or(0, |i| i + 1)
    }

    /// Returns the value of a single cell
    ///
    /// # Arguments
    ///
    /// * 'row' - 1-based row
    /// * 'col' - 1-based column
    pub fn get_value(&self, row: usize, col: usize) -> &str {
        if row == 0 || col == 0 {
            return "";
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .map_or("", |c| c.as_str())
    }

    /// Returns the values of a range, cells outside the stored area are empty strings
    ///
    /// # Arguments
    ///
    /// * 'row' - 1-based first row
    /// * 'col' - 1-based first column
    /// * 'num_rows' - number of rows
    /// * 'num_cols' - number of columns
    pub fn get_values(&self, row: usize, col: usize, num_rows: usize, num_cols: usize) -> Vec<Vec<String>> {
        (row..row + num_rows)
            .map(|r| (col..col + num_cols).map(|c| self.get_value(r, c).to_string()).collect())
            .collect()
    }

    /// Writes a block of values with its upper left corner at the given cell
    ///
    /// # Arguments
    ///
    /// * 'row' - 1-based first row
    /// * 'col' - 1-based first column
    /// * 'values' - rows of values to write
    pub fn set_values(&mut self, row: usize, col: usize, values: &[Vec<String>]) -> Result<(), SheetError> {
        if row == 0 || col == 0 {
            return Err(SheetError(format!("cell ({}, {}) is outside the sheet", row, col)));
        }

        for (i, values_row) in values.iter().enumerate() {
            for (j, value) in values_row.iter().enumerate() {
                self.set_cell(row + i, col + j, value.clone());
            }
        }

        Ok(())
    }

    /// Empties all cells in a range
    ///
    /// # Arguments
    ///
    /// * 'row' - 1-based first row
    /// * 'col' - 1-based first column
    /// * 'num_rows' - number of rows
    /// * 'num_cols' - number of columns
    pub fn clear_content(&mut self, row: usize, col: usize, num_rows: usize, num_cols: usize) {
        let first_row = row.max(1) - 1;
        let first_col = col.max(1) - 1;

        for r in self.rows.iter_mut().skip(first_row).take(num_rows) {
            for c in r.iter_mut().skip(first_col).take(num_cols) {
                c.clear();
            }
        }
    }

    fn set_cell(&mut self, row: usize, col: usize, value: String) {
        if self.rows.len() < row {
            self.rows.resize(row, Vec::new());
        }
        let r = &mut self.rows[row - 1];
        if r.len() < col {
            r.resize(col, String::new());
        }
        r[col - 1] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sheet_with(dir: &TempDir, content: &str) -> Sheet {
        let path = dir.path().join("weather_tool.csv");
        fs::write(&path, content).unwrap();
        Sheet::open(&path).unwrap()
    }

    #[test]
    fn ragged_rows_and_bounds() {
        let dir = TempDir::new().unwrap();
        let sheet = sheet_with(&dir, "Weather Tool\n,,2024-06-01\nAB,Edmonton,20\nON,Toronto\n,,\n");

        assert_eq!(sheet.last_row(), 4);
        assert_eq!(sheet.last_column(), 3);
        assert_eq!(sheet.get_value(3, 2), "Edmonton");
        assert_eq!(sheet.get_value(4, 3), "");
        assert_eq!(sheet.get_value(9, 9), "");
        assert_eq!(sheet.get_values(3, 1, 2, 2), vec![
            vec!["AB".to_string(), "Edmonton".to_string()],
            vec!["ON".to_string(), "Toronto".to_string()],
        ]);
    }

    #[test]
    fn set_values_grows_sheet() {
        let dir = TempDir::new().unwrap();
        let mut sheet = sheet_with(&dir, "a\n");

        sheet.set_values(3, 4, &[vec!["x".to_string()], vec!["y".to_string()]]).unwrap();

        assert_eq!(sheet.last_row(), 4);
        assert_eq!(sheet.last_column(), 4);
        assert_eq!(sheet.get_value(3, 4), "x");
        assert_eq!(sheet.get_value(4, 4), "y");
        assert!(sheet.set_values(0, 1, &[vec!["z".to_string()]]).is_err());
    }

    #[test]
    fn clear_content_keeps_cells_outside_range() {
        let dir = TempDir::new().unwrap();
        let mut sheet = sheet_with(&dir, "h\n,,d1,d2\nAB,Edmonton,1,2\nON,Toronto,3,4\n");

        sheet.clear_content(2, 3, 3, 2);

        assert_eq!(sheet.last_column(), 2);
        assert_eq!(sheet.get_value(3, 2), "Edmonton");
        assert_eq!(sheet.get_value(2, 3), "");
        assert_eq!(sheet.get_value(4, 4), "");
    }

    #[test]
    fn blank_lines_keep_row_numbers() {
        let dir = TempDir::new().unwrap();
        let sheet = sheet_with(&dir, "Weather Tool\n\nAB,Edmonton\n\n\nON,Toronto\n");

        assert_eq!(sheet.last_row(), 6);
        assert_eq!(sheet.get_value(1, 1), "Weather Tool");
        assert_eq!(sheet.get_value(2, 1), "");
        assert_eq!(sheet.get_value(3, 2), "Edmonton");
        assert_eq!(sheet.get_value(6, 2), "Toronto");
    }

    #[test]
    fn multi_line_cell_does_not_shift_rows() {
        let dir = TempDir::new().unwrap();
        let sheet = sheet_with(&dir, "\"Weather\nTool\"\n\nAB,Edmonton\n");

        assert_eq!(sheet.get_value(1, 1), "Weather\nTool");
        assert_eq!(sheet.get_value(2, 1), "");
        assert_eq!(sheet.get_value(3, 2), "Edmonton");
        assert_eq!(sheet.last_row(), 3);
    }

    #[test]
    fn blank_lines_with_crlf_endings() {
        let dir = TempDir::new().unwrap();
        let sheet = sheet_with(&dir, "Weather Tool\r\n\r\nAB,Edmonton\r\nON,Toronto\r\n");

        assert_eq!(sheet.get_value(2, 1), "");
        assert_eq!(sheet.get_value(3, 2), "Edmonton");
        assert_eq!(sheet.get_value(4, 2), "Toronto");
        assert_eq!(sheet.last_row(), 4);
    }

    #[test]
    fn save_keeps_blank_rows() {
        let dir = TempDir::new().unwrap();
        let mut sheet = sheet_with(&dir, "Weather Tool\n\nAB,Edmonton\n");

        sheet.set_values(3, 3, &[vec!["21".to_string()]]).unwrap();
        sheet.save().unwrap();

        let reopened = Sheet::open(dir.path().join("weather_tool.csv")).unwrap();
        assert_eq!(reopened.get_value(3, 2), "Edmonton");
        assert_eq!(reopened.get_value(3, 3), "21");
    }

    #[test]
    fn save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let mut sheet = sheet_with(&dir, "Weather Tool\n,\nAB,Edmonton\n");

        sheet.set_values(2, 3, &[vec!["2024-06-01".to_string(), "2024-06-02".to_string()]]).unwrap();
        sheet.save().unwrap();

        let content = fs::read_to_string(dir.path().join("weather_tool.csv")).unwrap();
        assert_eq!(content, "Weather Tool,,,\n,,2024-06-01,2024-06-02\nAB,Edmonton,,\n");

        let reopened = Sheet::open(dir.path().join("weather_tool.csv")).unwrap();
        assert_eq!(reopened.get_value(2, 4), "2024-06-02");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Sheet::open("/nonexistent/weather_tool.csv").is_err());
    }
}
