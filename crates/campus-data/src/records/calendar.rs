//! Academic years and their semesters.

use chrono::{DateTime, Utc};

table_record! {
    /// An academic year, starting in June and ending in February.
    pub struct AcademicYear in "academic_years" {
        academic_year_id: String => Text,
        academic_year_gregorian_year: i32 => Integer,
        academic_year_start_timestamp: DateTime<Utc> => Timestamp,
        academic_year_end_timestamp: DateTime<Utc> => Timestamp,
        academic_year_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A three-month term within an academic year.
    pub struct Semester in "semesters" {
        semester_id: String => Text,
        academic_year_id: String => Text,
        semester_start_timestamp: DateTime<Utc> => Timestamp,
        semester_end_timestamp: DateTime<Utc> => Timestamp,
        semester_created_timestamp: DateTime<Utc> => Timestamp,
    }
}
