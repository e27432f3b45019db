//! Subject, schedule and grading criteria generation.

use chrono::NaiveTime;

use crate::error::GenerationError;
use crate::faker::Faker;
use crate::generator::pick_parent;
use crate::records::{
    DayOfWeek, GradingCriteria, GradingCriteriaGrade, Subject, SubjectSchedule, User,
};

/// Letter grades and their minimum scores, lowest first.
pub const GRADE_LADDER: [(&str, i32); 8] = [
    ("F", 0),
    ("D", 40),
    ("D+", 45),
    ("C", 60),
    ("C+", 65),
    ("B", 70),
    ("B+", 75),
    ("A", 80),
];

/// Length of a class slot in hours.
const CLASS_LENGTH_HOURS: u32 = 2;

/// Generate `count` subjects worth 1 to 6 credits.
pub fn generate_subjects(faker: &mut Faker, count: usize) -> Vec<Subject> {
    (0..count)
        .map(|_| Subject {
            subject_id: faker.id(),
            subject_name: faker.title(),
            subject_description: faker.sentence(12),
            subject_credit: i32::try_from(faker.number(1, 6)).unwrap_or(1),
            subject_created_timestamp: faker.past_years(8),
        })
        .collect()
}

/// Two distinct weekdays for a subject's paired class days.
pub fn paired_weekdays(faker: &mut Faker) -> (DayOfWeek, DayOfWeek) {
    let first = faker.number(0, 6);
    let offset = faker.number(1, 6);
    (weekday(first), weekday(first + offset))
}

/// Up to seven distinct weekdays.
pub fn distinct_weekdays(faker: &mut Faker, count: usize) -> Vec<DayOfWeek> {
    let wanted = count.min(DayOfWeek::ALL.len());
    faker
        .sample(&DayOfWeek::ALL, wanted, wanted)
        .into_iter()
        .copied()
        .collect()
}

fn weekday(index: usize) -> DayOfWeek {
    match index.rem_euclid(7) {
        0 => DayOfWeek::Sunday,
        1 => DayOfWeek::Monday,
        2 => DayOfWeek::Tuesday,
        3 => DayOfWeek::Wednesday,
        4 => DayOfWeek::Thursday,
        5 => DayOfWeek::Friday,
        _ => DayOfWeek::Saturday,
    }
}

/// Generate weekly schedules for every subject.
///
/// Two schedules per subject use [`paired_weekdays`]; other counts draw
/// distinct weekdays, capped at seven. Classes start on the hour between
/// 09:00 and 16:00 and last two hours.
pub fn generate_subject_schedules(
    faker: &mut Faker,
    subjects: &[Subject],
    per_subject: usize,
) -> Vec<SubjectSchedule> {
    let mut schedules = Vec::new();
    for subject in subjects {
        let days = if per_subject == 2 {
            let (first, second) = paired_weekdays(faker);
            vec![first, second]
        } else {
            distinct_weekdays(faker, per_subject)
        };
        for day in days {
            let start_hour = u32::try_from(faker.number(9, 16)).unwrap_or(9);
            schedules.push(SubjectSchedule {
                subject_schedule_id: faker.id(),
                subject_id: subject.subject_id.clone(),
                subject_schedule_day_of_week: day,
                subject_schedule_start_time_of_day: on_the_hour(start_hour),
                subject_schedule_end_time_of_day: on_the_hour(start_hour + CLASS_LENGTH_HOURS),
            });
        }
    }
    schedules
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Generate a single grading criteria owned by a random user.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when `owners` is empty.
pub fn generate_grading_criterias(
    faker: &mut Faker,
    owners: &[User],
) -> Result<Vec<GradingCriteria>, GenerationError> {
    let owner = pick_parent(faker, owners, "grading_criterias", "users")?;
    Ok(vec![GradingCriteria {
        grading_criteria_id: faker.id(),
        user_id: owner.user_id.clone(),
        grading_criteria_name: faker.title(),
        grading_criteria_created_timestamp: faker.past_years(2),
    }])
}

/// Generate the [`GRADE_LADDER`] for every grading criteria.
pub fn generate_grading_criteria_grades(
    faker: &mut Faker,
    criterias: &[GradingCriteria],
) -> Vec<GradingCriteriaGrade> {
    criterias
        .iter()
        .flat_map(|criteria| {
            GRADE_LADDER
                .iter()
                .map(|(alphabet, minimum_score)| GradingCriteriaGrade {
                    grading_criteria_grade_id: faker.id(),
                    grading_criteria_id: criteria.grading_criteria_id.clone(),
                    grading_criteria_grade_alphabet: (*alphabet).to_owned(),
                    grading_criteria_grade_minimum_score: *minimum_score,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
