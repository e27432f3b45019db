//! Admin, professor and student account generation.

use std::collections::{HashMap, HashSet};

use crate::error::GenerationError;
use crate::faker::Faker;
use crate::generator::pick_parent;
use crate::ids::national_id;
use crate::records::{AcademicYear, Major, Professor, Role, Student, User};

/// Pre-hashed argon2id password shared by every generated account.
pub const ENCRYPTED_PASSWORD: &str = "$argon2id$v=19$m=4096,t=12,p=6$Yw4TlZTREJt9FX15Qbp5wcOaf0rs6z+MDYjgOx+i/vBfSCqel7DSa1UG$KKR3zYuM98AVnhADF920hB/cAFjByy/3maLCQH5lWGvguBCBAEIWgFZQv6rJcdNHOeB3Pw3Y20ZXqHyWMXTnQQ";

/// Offset between the Gregorian and Buddhist calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Highest four-digit student sequence number.
const MAX_STUDENT_SEQUENCE: u32 = 9_999;

fn generate_user(faker: &mut Faker, role: Role, max_age_years: u32) -> User {
    let first = faker.first_name();
    let last = faker.last_name();
    User {
        user_id: faker.id(),
        user_username: faker.username(&first, &last),
        user_email: faker.email(&first, &last),
        user_password: ENCRYPTED_PASSWORD.to_owned(),
        user_role: role,
        user_created_timestamp: faker.past_years(max_age_years),
    }
}

/// Generate `count` admin accounts.
pub fn generate_admins(faker: &mut Faker, count: usize) -> Vec<User> {
    (0..count)
        .map(|_| generate_user(faker, Role::Admin, 10))
        .collect()
}

/// Generate `count` professor accounts with their profiles.
pub fn generate_professors(faker: &mut Faker, count: usize) -> Vec<(User, Professor)> {
    (0..count)
        .map(|_| {
            let user = generate_user(faker, Role::Professor, 10);
            let oldest = faker.years_ago(70);
            let youngest = faker.years_ago(30);
            let professor = Professor {
                professor_id: user.user_id.clone(),
                professor_profile_image_path: String::new(),
                professor_birthdate: faker.between(oldest, youngest),
            };
            (user, professor)
        })
        .collect()
}

/// Compose a student representative ID.
///
/// The ID is the last two digits of the Buddhist-era admission year, the
/// major representative ID, and the four-digit sequence number.
///
/// # Example
///
/// ```
/// use campus_data::generator::people::compose_student_representative_id;
///
/// assert_eq!(compose_student_representative_id(2015, "03", 1), "58030001");
/// ```
#[must_use]
pub fn compose_student_representative_id(
    gregorian_year: i32,
    major_representative_id: &str,
    sequence: u32,
) -> String {
    let year_digits = (gregorian_year + BUDDHIST_ERA_OFFSET).rem_euclid(100);
    format!("{year_digits:02}{major_representative_id}{sequence:04}")
}

/// Running student sequences and the set of assigned representative IDs.
///
/// Sequences start at `0001` and are scoped to the admission year and the
/// major representative ID, which together form the ID prefix.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    sequences: HashMap<(i32, String), u32>,
    assigned: HashSet<String>,
}

impl StudentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assigned representative IDs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no IDs have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Assign the next representative ID for a student admitted in
    /// `academic_year` to `major`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::StudentSequenceExhausted`] past sequence
    /// 9999, or [`GenerationError::DuplicateStudentRepresentativeId`] when
    /// the composed ID is already assigned.
    pub fn assign(
        &mut self,
        academic_year: &AcademicYear,
        major: &Major,
    ) -> Result<String, GenerationError> {
        let year = academic_year.academic_year_gregorian_year;
        let key = (year, major.major_representative_id.clone());
        let sequence = self.sequences.get(&key).map_or(1, |last| last + 1);
        if sequence > MAX_STUDENT_SEQUENCE {
            return Err(GenerationError::StudentSequenceExhausted {
                major_representative_id: major.major_representative_id.clone(),
                gregorian_year: year,
            });
        }
        let representative_id =
            compose_student_representative_id(year, &major.major_representative_id, sequence);
        self.claim(representative_id.clone())?;
        self.sequences.insert(key, sequence);
        Ok(representative_id)
    }

    /// Record an externally composed representative ID.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateStudentRepresentativeId`] when the
    /// ID is already assigned. There is no retry.
    pub fn claim(&mut self, representative_id: String) -> Result<(), GenerationError> {
        if self.assigned.contains(&representative_id) {
            return Err(GenerationError::DuplicateStudentRepresentativeId { representative_id });
        }
        self.assigned.insert(representative_id);
        Ok(())
    }
}

/// Generate `count` student accounts with their profiles.
///
/// Each student is admitted to a random major in a random academic year and
/// advised by a random professor.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when majors, academic
/// years or professors are empty, and propagates representative ID failures
/// from [`StudentRegistry::assign`].
pub fn generate_students(
    faker: &mut Faker,
    majors: &[Major],
    academic_years: &[AcademicYear],
    professors: &[Professor],
    count: usize,
) -> Result<Vec<(User, Student)>, GenerationError> {
    let mut registry = StudentRegistry::new();
    let mut students = Vec::new();
    for _ in 0..count {
        let user = generate_user(faker, Role::Student, 18);
        let major = pick_parent(faker, majors, "students", "majors")?;
        let academic_year = pick_parent(faker, academic_years, "students", "academic_years")?;
        let advisor = pick_parent(faker, professors, "students", "professors")?;
        let representative_id = registry.assign(academic_year, major)?;
        let student = Student {
            student_id: user.user_id.clone(),
            student_representative_id: representative_id,
            student_profile_image_path: String::new(),
            student_nid: national_id(faker.rng()),
            student_birthdate: faker.past_years(30),
            student_previous_school_name: faker.company_name(),
            student_previous_school_gpa: gpa(faker),
            major_id: major.major_id.clone(),
            professor_id: advisor.professor_id.clone(),
            first_academic_year_id: academic_year.academic_year_id.clone(),
        };
        students.push((user, student));
    }
    Ok(students)
}

/// Grade point average between 2.00 and 4.00 in steps of 0.01.
#[expect(clippy::float_arithmetic, reason = "GPA is stored as a double")]
fn gpa(faker: &mut Faker) -> f64 {
    let hundredths = u32::try_from(faker.number(200, 400)).unwrap_or(200);
    f64::from(hundredths) / 100.0
}
