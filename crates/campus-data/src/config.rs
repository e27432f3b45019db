//! Generation configuration.
//!
//! A [`GenerationConfig`] replaces process-wide state: the seed, the
//! reference "now" and every record count travel with the value passed into
//! [`crate::generate_dataset`].

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::geo::Point;

/// Default length of opaque record identifiers.
pub const DEFAULT_ID_LENGTH: usize = 32;

/// Latitude and longitude buildings are scattered around by default.
pub const DEFAULT_CAMPUS_CENTER: Point = Point {
    x: 16.748_496_783_203_41,
    y: 100.191_643_926_547_4,
};

/// Record counts and reference values for a seed run.
///
/// # Example
///
/// ```
/// use campus_data::GenerationConfig;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
/// let config = GenerationConfig::new(42, now)
///     .with_faculty_count(2)
///     .with_academic_years(2015..2030);
///
/// assert_eq!(config.seed(), 42);
/// assert_eq!(config.faculty_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    seed: u64,
    reference_time: DateTime<Utc>,
    id_length: usize,
    faculty_count: usize,
    curriculums_per_faculty: usize,
    majors_per_curriculum: usize,
    credit_specifications_per_major: usize,
    academic_years: Range<i32>,
    admin_count: usize,
    professor_count: usize,
    student_count: usize,
    building_count: usize,
    campus_center: Point,
    subject_count: usize,
    schedules_per_subject: usize,
    post_count: usize,
    deactivated_category_announcement_count: usize,
    deactivated_global_announcement_count: usize,
}

impl GenerationConfig {
    /// Create a configuration with default counts.
    #[must_use]
    pub const fn new(seed: u64, reference_time: DateTime<Utc>) -> Self {
        Self {
            seed,
            reference_time,
            id_length: DEFAULT_ID_LENGTH,
            faculty_count: 6,
            curriculums_per_faculty: 3,
            majors_per_curriculum: 3,
            credit_specifications_per_major: 5,
            academic_years: 2015..2025,
            admin_count: 20,
            professor_count: 20,
            student_count: 200,
            building_count: 12,
            campus_center: DEFAULT_CAMPUS_CENTER,
            subject_count: 50,
            schedules_per_subject: 2,
            post_count: 200,
            deactivated_category_announcement_count: 100,
            deactivated_global_announcement_count: 100,
        }
    }

    /// Set the length of generated identifiers.
    #[must_use]
    pub const fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    /// Set the number of faculties.
    #[must_use]
    pub const fn with_faculty_count(mut self, count: usize) -> Self {
        self.faculty_count = count;
        self
    }

    /// Set the number of curriculums generated for each faculty.
    #[must_use]
    pub const fn with_curriculums_per_faculty(mut self, count: usize) -> Self {
        self.curriculums_per_faculty = count;
        self
    }

    /// Set the number of majors generated for each curriculum.
    #[must_use]
    pub const fn with_majors_per_curriculum(mut self, count: usize) -> Self {
        self.majors_per_curriculum = count;
        self
    }

    /// Set the number of credit specifications generated for each major.
    #[must_use]
    pub const fn with_credit_specifications_per_major(mut self, count: usize) -> Self {
        self.credit_specifications_per_major = count;
        self
    }

    /// Set the half-open Gregorian year range for academic years.
    #[must_use]
    pub fn with_academic_years(mut self, years: Range<i32>) -> Self {
        self.academic_years = years;
        self
    }

    /// Set the number of admin accounts.
    #[must_use]
    pub const fn with_admin_count(mut self, count: usize) -> Self {
        self.admin_count = count;
        self
    }

    /// Set the number of professor accounts.
    #[must_use]
    pub const fn with_professor_count(mut self, count: usize) -> Self {
        self.professor_count = count;
        self
    }

    /// Set the number of student accounts.
    #[must_use]
    pub const fn with_student_count(mut self, count: usize) -> Self {
        self.student_count = count;
        self
    }

    /// Set the number of buildings.
    #[must_use]
    pub const fn with_building_count(mut self, count: usize) -> Self {
        self.building_count = count;
        self
    }

    /// Set the point buildings are scattered around.
    #[must_use]
    pub const fn with_campus_center(mut self, center: Point) -> Self {
        self.campus_center = center;
        self
    }

    /// Set the number of subjects.
    #[must_use]
    pub const fn with_subject_count(mut self, count: usize) -> Self {
        self.subject_count = count;
        self
    }

    /// Set the number of weekly schedules per subject.
    ///
    /// Counts above seven are capped at one schedule per weekday.
    #[must_use]
    pub const fn with_schedules_per_subject(mut self, count: usize) -> Self {
        self.schedules_per_subject = count;
        self
    }

    /// Set the number of ordinary forum posts.
    #[must_use]
    pub const fn with_post_count(mut self, count: usize) -> Self {
        self.post_count = count;
        self
    }

    /// Set the number of deactivated category and global announcements.
    #[must_use]
    pub const fn with_deactivated_announcement_counts(
        mut self,
        category_based: usize,
        global: usize,
    ) -> Self {
        self.deactivated_category_announcement_count = category_based;
        self.deactivated_global_announcement_count = global;
        self
    }

    /// RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Timestamp treated as "now" by every generator.
    #[must_use]
    pub const fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Length of generated identifiers.
    #[must_use]
    pub const fn id_length(&self) -> usize {
        self.id_length
    }

    /// Number of faculties.
    #[must_use]
    pub const fn faculty_count(&self) -> usize {
        self.faculty_count
    }

    /// Curriculums per faculty.
    #[must_use]
    pub const fn curriculums_per_faculty(&self) -> usize {
        self.curriculums_per_faculty
    }

    /// Majors per curriculum.
    #[must_use]
    pub const fn majors_per_curriculum(&self) -> usize {
        self.majors_per_curriculum
    }

    /// Credit specifications per major.
    #[must_use]
    pub const fn credit_specifications_per_major(&self) -> usize {
        self.credit_specifications_per_major
    }

    /// Half-open Gregorian year range for academic years.
    #[must_use]
    pub fn academic_years(&self) -> Range<i32> {
        self.academic_years.clone()
    }

    /// Number of admin accounts.
    #[must_use]
    pub const fn admin_count(&self) -> usize {
        self.admin_count
    }

    /// Number of professor accounts.
    #[must_use]
    pub const fn professor_count(&self) -> usize {
        self.professor_count
    }

    /// Number of student accounts.
    #[must_use]
    pub const fn student_count(&self) -> usize {
        self.student_count
    }

    /// Number of buildings.
    #[must_use]
    pub const fn building_count(&self) -> usize {
        self.building_count
    }

    /// Point buildings are scattered around.
    #[must_use]
    pub const fn campus_center(&self) -> Point {
        self.campus_center
    }

    /// Number of subjects.
    #[must_use]
    pub const fn subject_count(&self) -> usize {
        self.subject_count
    }

    /// Schedules per subject.
    #[must_use]
    pub const fn schedules_per_subject(&self) -> usize {
        self.schedules_per_subject
    }

    /// Number of ordinary forum posts.
    #[must_use]
    pub const fn post_count(&self) -> usize {
        self.post_count
    }

    /// Number of deactivated category-based announcements.
    #[must_use]
    pub const fn deactivated_category_announcement_count(&self) -> usize {
        self.deactivated_category_announcement_count
    }

    /// Number of deactivated global announcements.
    #[must_use]
    pub const fn deactivated_global_announcement_count(&self) -> usize {
        self.deactivated_global_announcement_count
    }
}
