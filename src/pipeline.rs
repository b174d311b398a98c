use chrono::NaiveDate;
use log::{info, warn};
use crate::assembler::{assemble, ForecastRecord};
use crate::config::SheetLayout;
use crate::directory::CityCodeDirectory;
use crate::errors::{ForecastError, WeatherGridError};
use crate::grid::ForecastGrid;
use crate::highs::get_highs;
use crate::manager_msc::WeatherFeed;
use crate::models::city::City;
use crate::sheet::Sheet;
use crate::week_window::WeekWindow;

/// A city together with the sheet row it was read from
struct SheetCity {
    row: usize,
    city: City,
}

/// Pulls forecasts for all cities listed in the sheet and writes them as a date aligned table.
///
/// The flow is strictly sequential:
/// * clear any previous output in the sheet
/// * read the city list
/// * fetch the city code directory, the only step allowed to fail the run
/// * for each city, look up its code, fetch its highs and translate them to dates
/// * build the grid and write it to the sheet
///
/// Per city failures only leave gaps for that city. The sheet is not saved here.
///
/// # Arguments
///
/// * 'layout' - where in the sheet cities, header and values are
/// * 'feed' - the forecast feed
/// * 'sheet' - the sheet to read cities from and write the table to
/// * 'today' - local calendar date anchoring the seven day window
pub fn run(layout: &SheetLayout, feed: &impl WeatherFeed, sheet: &mut Sheet, today: NaiveDate)
           -> Result<ForecastGrid, WeatherGridError> {

    clear_output(sheet, layout);

    let cities = import_cities(sheet, layout);
    info!("Found {} cities in sheet", cities.len());

    let directory = CityCodeDirectory::build(feed.site_features()?);
    info!("City code directory holds {} cities", directory.len());

    let window = WeekWindow::new(today);
    let days = window.dates();
    if let (Some(first), Some(last)) = (days.first(), days.last()) {
        info!("Forecast window {} to {}", first, last);
    }

    let records = cities
        .iter()
        .map(|c| {
            let highs = directory.lookup(&c.city)
                .map_err(ForecastError::from)
                .and_then(|code| get_highs(feed, &c.city.province, code));

            assemble(&c.city, highs, &window)
        })
        .collect::<Vec<ForecastRecord>>();

    for (c, record) in cities.iter().zip(&records) {
        info!("{}: {}", c.city, record);
    }

    let without_data = records.iter().filter(|r| r.is_empty()).count();
    if without_data > 0 {
        warn!("{} of {} cities have no forecast data", without_data, records.len());
    }

    let grid = ForecastGrid::build(&records);
    print_table(sheet, layout, &cities, &grid)?;

    Ok(grid)
}

/// Empties header and values from any previous run, cities are left as is
///
/// # Arguments
///
/// * 'sheet' - the sheet to clear
/// * 'layout' - sheet layout
fn clear_output(sheet: &mut Sheet, layout: &SheetLayout) {
    let last_row = sheet.last_row();
    let last_column = sheet.last_column();

    if last_row >= layout.header_row && last_column >= layout.data_first_col {
        sheet.clear_content(
            layout.header_row,
            layout.data_first_col,
            last_row - layout.header_row + 1,
            last_column - layout.data_first_col + 1);
    }
}

/// Reads the city list, province and name, skipping rows without a province
///
/// # Arguments
///
/// * 'sheet' - the sheet to read from
/// * 'layout' - sheet layout
fn import_cities(sheet: &Sheet, layout: &SheetLayout) -> Vec<SheetCity> {
    let last_row = sheet.last_row();
    if last_row < layout.city_first_row {
        return Vec::new();
    }

    sheet.get_values(layout.city_first_row, layout.city_first_col, last_row - layout.city_first_row + 1, 2)
        .into_iter()
        .enumerate()
        .filter(|(_, row)| !row[0].is_empty())
        .map(|(i, mut row)| {
            let name = row.pop().unwrap_or_default();
            let province = row.pop().unwrap_or_default();
            SheetCity { row: layout.city_first_row + i, city: City { province, name } }
        })
        .collect()
}

/// Writes header dates and, beneath each date, one value per city on the city's own row
///
/// # Arguments
///
/// * 'sheet' - the sheet to write to
/// * 'layout' - sheet layout
/// * 'cities' - cities in grid order
/// * 'grid' - the grid to write
fn print_table(sheet: &mut Sheet, layout: &SheetLayout, cities: &[SheetCity], grid: &ForecastGrid)
               -> Result<(), WeatherGridError> {

    if grid.dates().is_empty() {
        warn!("No forecast data for any city, nothing to write");
        return Ok(());
    }

    sheet.set_values(layout.header_row, layout.data_first_col, &[grid.header()])?;

    for (i, column) in grid.columns().iter().enumerate() {
        for (c, cell) in cities.iter().zip(column) {
            let value = cell.clone().unwrap_or_default();
            sheet.set_values(c.row, layout.data_first_col + i, &[vec![value]])?;
        }
    }

    Ok(())
}
