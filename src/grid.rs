use std::fmt;
use chrono::NaiveDate;
use crate::assembler::ForecastRecord;

/// Date aligned table of temperatures, one column per header date and one cell per city
#[derive(Debug, PartialEq, Eq)]
pub struct ForecastGrid {
    dates: Vec<NaiveDate>,
    columns: Vec<Vec<Option<String>>>,
}

impl ForecastGrid {
    /// Builds the grid from one record per city, given in sheet order.
    ///
    /// The header is the date sequence of the record with the most dates, the first such
    /// record in city order if several are equally long. Dates that only other records hold
    /// are not part of the grid. Each header date gets one cell per city, where a city
    /// without a value for that date gets a gap (None).
    ///
    /// # Arguments
    ///
    /// * 'records' - forecast records aligned to the city order
    pub fn build(records: &[ForecastRecord]) -> ForecastGrid {
        let canonical = records.iter().fold(None::<&ForecastRecord>, |best, r| match best {
            Some(b) if b.len() >= r.len() => Some(b),
            _ => Some(r),
        });

        let dates = canonical.map(|r| r.dates()).unwrap_or_default();

        let columns = dates.iter()
            .map(|date| records.iter().map(|r| r.get(date).cloned()).collect::<Vec<Option<String>>>())
            .collect::<Vec<Vec<Option<String>>>>();

        ForecastGrid { dates, columns }
    }

    /// Header dates in grid order
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Header dates as ISO formatted strings, i.e. YYYY-MM-DD
    pub fn header(&self) -> Vec<String> {
        self.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
    }

    /// One column of city cells per header date
    pub fn columns(&self) -> &[Vec<Option<String>>] {
        &self.columns
    }

    /// Returns the cells of the given header date, one per city
    ///
    /// # Arguments
    ///
    /// * 'date' - header date
    #[cfg(test)]
    pub fn column(&self, date: &NaiveDate) -> Option<&Vec<Option<String>>> {
        self.dates.iter().position(|d| d == date).map(|i| &self.columns[i])
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ForecastGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (date, column) in self.dates.iter().zip(&self.columns) {
            write!(f, "{}", date.format("%Y-%m-%d"))?;
            for cell in column {
                write!(f, " {:>5}", cell.as_deref().unwrap_or("-"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
