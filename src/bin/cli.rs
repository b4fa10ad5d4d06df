//! Interactive bikeshare exploration CLI.
//!
//! Prompts for a city and an optional month or day filter, prints the four
//! statistics groups over the filtered trips, then offers paginated raw-row
//! browsing and a restart.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bikeshare
//! ```
//!
//! City data files are looked up in `cities.toml` when present, otherwise
//! the conventional `chicago.csv` / `new_york_city.csv` / `washington.csv`
//! in the working directory.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn, so prompts stay readable)

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bikeshare::models::{DAY_NAMES, MONTH_NAMES};
use bikeshare::services::{
    compute_duration_stats, compute_station_stats, compute_time_stats, compute_user_stats,
    RawDataPager, DEFAULT_BATCH_SIZE,
};
use bikeshare::{
    BikeshareResult, City, CityConfig, DayFilter, FilterSpec, MonthFilter, Trip, TripLoader,
};

const RETRY_MESSAGE: &str =
    "Please attempt your input again with one of the options specified above!";
const SEPARATOR_WIDTH: usize = 100;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .init();

    let config = CityConfig::from_file_or_default(Path::new("cities.toml"))
        .context("Failed to load city configuration")?;
    let loader = TripLoader::new(config);

    loop {
        let Some(spec) = get_filters()? else {
            break; // stdin closed
        };

        match loader.load(&spec) {
            Ok(trips) => {
                print_selection(&spec);
                print_statistics(&trips)?;

                if !prompt_raw_data(&trips)? {
                    break;
                }
            }
            // Fatal for this session iteration: report, show no partial
            // statistics, and fall through to the restart prompt.
            Err(e) => println!("\nCould not load data: {}", e),
        }

        println!("\nWould you like to restart with a new selection? Enter yes or no:");
        if !matches!(read_token("-->")?, Some(answer) if answer.eq_ignore_ascii_case("yes")) {
            break;
        }
    }

    Ok(())
}

/// Reads one trimmed input line. `None` means stdin was closed.
fn read_token(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompts with a generic retry message until `parse` accepts the token.
fn prompt_until<T>(parse: impl Fn(&str) -> BikeshareResult<T>) -> Result<Option<T>> {
    loop {
        let Some(token) = read_token("-->")? else {
            return Ok(None);
        };
        match parse(&token) {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{}", RETRY_MESSAGE),
        }
    }
}

#[derive(Clone, Copy)]
enum FilterMode {
    Month,
    Day,
    None,
}

/// Asks the user for a city and an optional month-or-day filter. The two
/// filters are mutually exclusive here: the mode prompt picks one.
fn get_filters() -> Result<Option<FilterSpec>> {
    println!("Hello! Let's explore some US bikeshare data!");
    println!("Note that certain cities do not have gender or birth date data available!");
    println!("Which city would you like to see data for?");
    println!("Enter C for Chicago\nEnter N for New York\nEnter W for Washington");
    let Some(city) = prompt_until(City::parse)? else {
        return Ok(None);
    };

    println!("Would you like to filter the data by time period?");
    println!("Enter M to filter by Month");
    println!("Enter D to filter by Day");
    println!("Enter N for No additional filter");
    let mode = prompt_until(|token| match token.trim().to_uppercase().as_str() {
        "M" => Ok(FilterMode::Month),
        "D" => Ok(FilterMode::Day),
        "N" => Ok(FilterMode::None),
        other => Err(bikeshare::BikeshareError::InvalidFilter(format!(
            "unknown filter mode '{}'",
            other
        ))),
    })?;
    let Some(mode) = mode else {
        return Ok(None);
    };

    let mut month = MonthFilter::All;
    let mut day = DayFilter::All;
    match mode {
        FilterMode::Month => {
            println!("Enter the month - Jan, Feb, Mar, Apr, May, Jun or alternately:");
            println!("To enter a range, separate start and end month by \"-\" (ex: Jan-Mar)");
            let Some(parsed) = prompt_until(MonthFilter::parse)? else {
                return Ok(None);
            };
            month = parsed;
        }
        FilterMode::Day => {
            println!("Enter the day - Mon, Tue, Wed, Thu, Fri, Sat, Sun or alternately");
            println!("For working week[Mon-Fri] enter WK and for weekends enter WN");
            let Some(parsed) = prompt_until(DayFilter::parse)? else {
                return Ok(None);
            };
            day = parsed;
        }
        FilterMode::None => {}
    }

    println!("{}", "-".repeat(SEPARATOR_WIDTH));
    Ok(Some(FilterSpec { city, month, day }))
}

fn print_selection(spec: &FilterSpec) {
    println!(
        "Selection data is for {}, for the month(s): {} and day(s): {}",
        spec.city, spec.month, spec.day
    );
}

fn print_statistics(trips: &[Trip]) -> Result<()> {
    print_time_stats(trips);
    print_station_stats(trips);
    print_duration_stats(trips)?;
    print_user_stats(trips);
    Ok(())
}

fn print_elapsed(started: Instant) {
    println!("\nThis took {:.6} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

fn print_time_stats(trips: &[Trip]) {
    println!("\nCalculating The Most Frequent Times of Travel based on start times...\n");
    let started = Instant::now();
    let stats = compute_time_stats(trips);

    match stats.month {
        Some((month, count)) => println!(
            "The most common month with {} rides was:\t\t{}",
            count,
            MONTH_NAMES
                .get(month as usize - 1)
                .copied()
                .unwrap_or("???")
        ),
        None => println!("**NOTE: No month data for this selection"),
    }
    match stats.weekday {
        Some((day, count)) => println!(
            "The most common day of week with {} rides was:\t{}",
            count, DAY_NAMES[day as usize]
        ),
        None => println!("**NOTE: No day of week data for this selection"),
    }
    match stats.hour {
        Some((hour, count)) => println!(
            "The most common start hour for {} rides was:\t{}:00",
            count, hour
        ),
        None => println!("**NOTE: No start hour data for this selection"),
    }
    print_elapsed(started);
}

fn print_station_stats(trips: &[Trip]) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let started = Instant::now();
    let stats = compute_station_stats(trips);

    match stats.start {
        Some((station, count)) => println!(
            "The most common start station with {} rides was:\t{}",
            count, station
        ),
        None => println!("**NOTE: No start station data for this selection"),
    }
    match stats.end {
        Some((station, count)) => println!(
            "The most common end station with {} rides was:\t{}",
            count, station
        ),
        None => println!("**NOTE: No end station data for this selection"),
    }
    match stats.trip {
        Some(((start, end), count)) => println!(
            "The most common trip stations with {} rides were b/w:\t{} AND {}",
            count, start, end
        ),
        None => println!("**NOTE: No trip data for this selection"),
    }
    print_elapsed(started);
}

fn print_duration_stats(trips: &[Trip]) -> Result<()> {
    println!("\nCalculating Trip Duration...\n");
    let started = Instant::now();
    let stats = compute_duration_stats(trips)?;

    println!(
        "The total travel time [Days HH:MM:SS] for {} rides was:\t{}",
        stats.trip_count, stats.total
    );
    println!(
        "The average travel time [HH:MM:SS] for {} rides was:\t{}",
        stats.trip_count,
        stats.mean.clock_display()
    );
    print_elapsed(started);
    Ok(())
}

fn print_frequency_table(label: &str, table: &Option<Vec<(String, usize)>>) {
    match table {
        Some(entries) => {
            println!("\nThe different {} counts are:", label);
            for (value, count) in entries {
                println!("{}\t{}", value, count);
            }
        }
        None => println!("\n**NOTE: No data available for {}", label),
    }
}

fn print_user_stats(trips: &[Trip]) {
    println!("\nCalculating User Stats...");
    let started = Instant::now();
    let stats = compute_user_stats(trips);

    print_frequency_table("User Type", &stats.user_types);
    print_frequency_table("Gender", &stats.genders);

    match stats.birth_years {
        Some(years) => {
            println!("\nThe earliest year of birth was:\t\t{}", years.earliest);
            println!("The most recent year of birth was:\t{}", years.most_recent);
            println!("The most common year of birth was:\t{}", years.most_common);
        }
        None => println!("\n**NOTE: No data available for Birth Year"),
    }
    print_elapsed(started);
}

/// Offers paginated raw-row browsing. Returns `false` when stdin closed.
fn prompt_raw_data(trips: &[Trip]) -> Result<bool> {
    println!("\nWould you like to see raw data? Enter yes or no:");
    match read_token("-->")? {
        None => return Ok(false),
        Some(answer) if answer.eq_ignore_ascii_case("yes") => {}
        Some(_) => return Ok(true),
    }

    let pager = RawDataPager::new(trips, DEFAULT_BATCH_SIZE)?;
    for batch in pager.batches() {
        for trip in batch {
            print_trip_row(trip);
        }
        println!();

        println!("\nContinue to see raw data? Enter yes or no.");
        match read_token("-->")? {
            None => return Ok(false),
            Some(answer) if answer.eq_ignore_ascii_case("yes") => {}
            Some(_) => break,
        }
    }
    Ok(true)
}

fn print_trip_row(trip: &Trip) {
    println!(
        "{} | {} | {}s | {} -> {} | {} | {} | {}",
        trip.start_time,
        trip.end_time.as_deref().unwrap_or("-"),
        trip.duration_seconds,
        trip.start_station,
        trip.end_station,
        trip.user_type.as_deref().unwrap_or("-"),
        trip.gender.as_deref().unwrap_or("-"),
        trip.birth_year
            .map_or_else(|| "-".to_string(), |y| y.to_string()),
    );
}
