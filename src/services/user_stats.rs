//! User demographics: type and gender counts, birth-year extremes.

use crate::models::Trip;
use crate::services::{frequency_table, mode_with_count};

/// Earliest, most recent, and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Demographic breakdown of the filtered table. Each field is `None` when
/// the corresponding column carries no values for this city — Washington
/// ships neither gender nor birth year — which is reported as unavailable,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Option<Vec<(String, usize)>>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute_user_stats(trips: &[Trip]) -> UserStats {
    let user_types = frequency_table(trips.iter().filter_map(|t| t.user_type.clone()));
    let genders = frequency_table(trips.iter().filter_map(|t| t.gender.clone()));

    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
    let birth_years = match (
        years.iter().min(),
        years.iter().max(),
        mode_with_count(years.iter().copied()),
    ) {
        (Some(&earliest), Some(&most_recent), Some((most_common, _))) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    UserStats {
        user_types: (!user_types.is_empty()).then_some(user_types),
        genders: (!genders.is_empty()).then_some(genders),
        birth_years,
    }
}
