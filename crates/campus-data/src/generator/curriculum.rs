//! Faculty, curriculum, major and credit specification generation.

use crate::error::GenerationError;
use crate::faker::Faker;
use crate::records::{Curriculum, Faculty, Major, MajorCreditSpecification};

/// Highest two-digit major representative ID.
const MAX_MAJOR_REPRESENTATIVE_ID: u32 = 99;

/// Generate `count` faculties.
pub fn generate_faculties(faker: &mut Faker, count: usize) -> Vec<Faculty> {
    (0..count)
        .map(|_| Faculty {
            faculty_id: faker.id(),
            faculty_name: format!("Faculty of {}", faker.title()),
            faculty_created_timestamp: faker.past_years(10),
        })
        .collect()
}

/// Generate `per_faculty` curriculums for every faculty.
pub fn generate_curriculums(
    faker: &mut Faker,
    faculties: &[Faculty],
    per_faculty: usize,
) -> Vec<Curriculum> {
    let mut curriculums = Vec::new();
    for faculty in faculties {
        for _ in 0..per_faculty {
            curriculums.push(Curriculum {
                curriculum_id: faker.id(),
                faculty_id: faculty.faculty_id.clone(),
                curriculum_name: faker.company_name(),
                curriculum_created_timestamp: faker.past_years(10),
            });
        }
    }
    curriculums
}

/// Generate `per_curriculum` majors for every curriculum.
///
/// Representative IDs count up from `00` within each curriculum.
///
/// # Errors
///
/// Returns [`GenerationError::MajorSequenceExhausted`] when a curriculum
/// would need more than one hundred majors.
pub fn generate_majors(
    faker: &mut Faker,
    curriculums: &[Curriculum],
    per_curriculum: usize,
) -> Result<Vec<Major>, GenerationError> {
    let mut majors: Vec<Major> = Vec::new();
    for curriculum in curriculums {
        for _ in 0..per_curriculum {
            let representative_id =
                next_major_representative_id(&majors, &curriculum.curriculum_id)?;
            majors.push(Major {
                major_id: faker.id(),
                major_representative_id: representative_id,
                curriculum_id: curriculum.curriculum_id.clone(),
                major_name: faker.profession(),
                major_created_timestamp: faker.past_years(10),
            });
        }
    }
    Ok(majors)
}

/// Next two-digit representative ID for a major in `curriculum_id`.
///
/// Scans `existing` for the highest representative ID already used by the
/// curriculum and increments it; the first major gets `00`.
///
/// # Errors
///
/// Returns [`GenerationError::MajorSequenceExhausted`] once `99` is taken.
///
/// # Example
///
/// ```
/// use campus_data::generator::curriculum::next_major_representative_id;
///
/// assert_eq!(next_major_representative_id(&[], "c1").expect("free"), "00");
/// ```
pub fn next_major_representative_id(
    existing: &[Major],
    curriculum_id: &str,
) -> Result<String, GenerationError> {
    let current = existing
        .iter()
        .filter(|major| major.curriculum_id == curriculum_id)
        .filter_map(|major| major.major_representative_id.parse::<u32>().ok())
        .max();
    let next = current.map_or(0, |value| value + 1);
    if next > MAX_MAJOR_REPRESENTATIVE_ID {
        return Err(GenerationError::MajorSequenceExhausted {
            curriculum_id: curriculum_id.to_owned(),
        });
    }
    Ok(format!("{next:02}"))
}

/// Generate `per_major` credit specifications for every major.
///
/// Minimum credits are multiples of three between 6 and 24.
pub fn generate_major_credit_specifications(
    faker: &mut Faker,
    majors: &[Major],
    per_major: usize,
) -> Vec<MajorCreditSpecification> {
    let mut specifications = Vec::new();
    for major in majors {
        for _ in 0..per_major {
            let blocks = faker.number(2, 8);
            specifications.push(MajorCreditSpecification {
                major_credit_specification_id: faker.id(),
                major_id: major.major_id.clone(),
                major_credit_specification_name: faker.title(),
                major_credit_specification_minimum_credit: i32::try_from(blocks * 3)
                    .unwrap_or(i32::MAX),
                major_credit_specification_created_timestamp: faker.past_years(8),
            });
        }
    }
    specifications
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn faker() -> Faker {
        Faker::from_seed(17, Utc::now(), 32)
    }

    fn major(curriculum_id: &str, representative_id: &str) -> Major {
        Major {
            major_id: format!("{curriculum_id}-{representative_id}"),
            major_representative_id: representative_id.to_owned(),
            curriculum_id: curriculum_id.to_owned(),
            major_name: "Major".to_owned(),
            major_created_timestamp: Utc::now(),
        }
    }

    #[rstest]
    fn hierarchy_counts_multiply(mut faker: Faker) {
        let faculties = generate_faculties(&mut faker, 6);
        let curriculums = generate_curriculums(&mut faker, &faculties, 6);
        let majors = generate_majors(&mut faker, &curriculums, 6).expect("ids available");

        assert_eq!(faculties.len(), 6);
        assert_eq!(curriculums.len(), 36);
        assert_eq!(majors.len(), 216);
    }

    #[rstest]
    fn representative_ids_count_from_zero_per_curriculum(mut faker: Faker) {
        let faculties = generate_faculties(&mut faker, 2);
        let curriculums = generate_curriculums(&mut faker, &faculties, 3);
        let majors = generate_majors(&mut faker, &curriculums, 6).expect("ids available");

        for curriculum in &curriculums {
            let ids: Vec<&str> = majors
                .iter()
                .filter(|major| major.curriculum_id == curriculum.curriculum_id)
                .map(|major| major.major_representative_id.as_str())
                .collect();
            assert_eq!(ids, ["00", "01", "02", "03", "04", "05"]);
        }
    }

    #[test]
    fn next_id_follows_current_maximum() {
        let existing = [major("a", "00"), major("a", "07"), major("b", "12")];
        assert_eq!(
            next_major_representative_id(&existing, "a").expect("free"),
            "08"
        );
        assert_eq!(
            next_major_representative_id(&existing, "b").expect("free"),
            "13"
        );
        assert_eq!(
            next_major_representative_id(&existing, "c").expect("free"),
            "00"
        );
    }

    #[test]
    fn next_id_fails_when_exhausted() {
        let existing = [major("a", "99")];
        assert_eq!(
            next_major_representative_id(&existing, "a"),
            Err(GenerationError::MajorSequenceExhausted {
                curriculum_id: "a".to_owned()
            })
        );
    }

    #[rstest]
    #[case(101)]
    #[case(usize::MAX / 2)]
    #[case(usize::MAX)]
    fn oversized_major_counts_exhaust_the_sequence(mut faker: Faker, #[case] per_curriculum: usize) {
        let faculties = generate_faculties(&mut faker, 1);
        let curriculums = generate_curriculums(&mut faker, &faculties, 3);
        let first = curriculums.first().expect("curriculum generated");

        let result = generate_majors(&mut faker, &curriculums, per_curriculum);

        assert_eq!(
            result,
            Err(GenerationError::MajorSequenceExhausted {
                curriculum_id: first.curriculum_id.clone()
            })
        );
    }

    #[rstest]
    fn credit_minimums_are_multiples_of_three(mut faker: Faker) {
        let faculties = generate_faculties(&mut faker, 1);
        let curriculums = generate_curriculums(&mut faker, &faculties, 1);
        let majors = generate_majors(&mut faker, &curriculums, 2).expect("ids available");
        let specifications = generate_major_credit_specifications(&mut faker, &majors, 5);

        assert_eq!(specifications.len(), 10);
        for specification in &specifications {
            let credit = specification.major_credit_specification_minimum_credit;
            assert!((6..=24).contains(&credit));
            assert_eq!(credit.rem_euclid(3), 0);
        }
    }
}
