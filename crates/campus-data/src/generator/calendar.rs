//! Academic year and semester generation.

use std::ops::Range;

use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::faker::Faker;
use crate::records::{AcademicYear, Semester};

const SEMESTER_LENGTH_MONTHS: u32 = 3;

/// Generate one academic year for every Gregorian year in `years`.
///
/// Each year starts between 1 June and 1 July and ends between 1 February
/// and 1 March of the following year. An empty or inverted range yields no
/// records.
pub fn generate_academic_years(faker: &mut Faker, years: Range<i32>) -> Vec<AcademicYear> {
    let mut academic_years = Vec::new();
    for year in years {
        let (Some(start_from), Some(start_to), Some(end_from), Some(end_to)) = (
            utc_midnight(year, 6, 1),
            utc_midnight(year, 7, 1),
            utc_midnight(year + 1, 2, 1),
            utc_midnight(year + 1, 3, 1),
        ) else {
            continue;
        };
        academic_years.push(AcademicYear {
            academic_year_id: faker.id(),
            academic_year_gregorian_year: year,
            academic_year_start_timestamp: faker.between(start_from, start_to),
            academic_year_end_timestamp: faker.between(end_from, end_to),
            academic_year_created_timestamp: faker.now(),
        });
    }
    academic_years
}

/// Generate two to four consecutive three-month semesters per academic year.
///
/// The first semester starts on the academic year's start timestamp.
pub fn generate_semesters(faker: &mut Faker, academic_years: &[AcademicYear]) -> Vec<Semester> {
    let mut semesters = Vec::new();
    for academic_year in academic_years {
        let count = faker.number(2, 4);
        let mut start = academic_year.academic_year_start_timestamp;
        for _ in 0..count {
            let Some(end) = start.checked_add_months(Months::new(SEMESTER_LENGTH_MONTHS)) else {
                break;
            };
            semesters.push(Semester {
                semester_id: faker.id(),
                academic_year_id: academic_year.academic_year_id.clone(),
                semester_start_timestamp: start,
                semester_end_timestamp: end,
                semester_created_timestamp: faker.now(),
            });
            start = end;
        }
    }
    semesters
}

fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
