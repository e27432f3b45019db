//! Subjects, weekly schedules and grading criteria.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Day of the week, Sunday first, stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[expect(missing_docs, reason = "weekday names are self-describing")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

integer_enum!(DayOfWeek, "day of week", {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
});

impl DayOfWeek {
    /// Every weekday, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];
}

table_record! {
    /// A course subject.
    pub struct Subject in "subjects" {
        subject_id: String => Text,
        subject_name: String => Text,
        subject_description: String => Text,
        subject_credit: i32 => Integer,
        subject_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A weekly class slot for a subject.
    pub struct SubjectSchedule in "subject_schedules" {
        subject_schedule_id: String => Text,
        subject_id: String => Text,
        subject_schedule_day_of_week: DayOfWeek => Integer,
        subject_schedule_start_time_of_day: NaiveTime => Time,
        subject_schedule_end_time_of_day: NaiveTime => Time,
    }
}

table_record! {
    /// A named grading scheme owned by a user.
    pub struct GradingCriteria in "grading_criterias" {
        grading_criteria_id: String => Text,
        user_id: String => Text,
        grading_criteria_name: String => Text,
        grading_criteria_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// One letter grade of a grading criteria and its minimum score.
    pub struct GradingCriteriaGrade in "grading_criteria_grades" {
        grading_criteria_grade_id: String => Text,
        grading_criteria_id: String => Text,
        grading_criteria_grade_alphabet: String => Text,
        grading_criteria_grade_minimum_score: i32 => Integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_round_trip_through_integers() {
        for (index, day) in DayOfWeek::ALL.into_iter().enumerate() {
            let value = i32::try_from(index).expect("small index");
            assert_eq!(i32::from(day), value);
            assert_eq!(DayOfWeek::try_from(value), Ok(day));
        }
        assert!(DayOfWeek::try_from(7).is_err());
    }
}
