//! Faculties, curriculums, majors and their credit requirements.

use chrono::{DateTime, Utc};

table_record! {
    /// A faculty of the university.
    pub struct Faculty in "faculties" {
        faculty_id: String => Text,
        faculty_name: String => Text,
        faculty_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A curriculum offered by a faculty.
    pub struct Curriculum in "curriculums" {
        curriculum_id: String => Text,
        faculty_id: String => Text,
        curriculum_name: String => Text,
        curriculum_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A major within a curriculum.
    ///
    /// `major_representative_id` is a two-digit, zero-padded sequence number
    /// unique within the curriculum.
    pub struct Major in "majors" {
        major_id: String => Text,
        major_representative_id: String => Text,
        curriculum_id: String => Text,
        major_name: String => Text,
        major_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A minimum-credit requirement attached to a major.
    pub struct MajorCreditSpecification in "major_credit_specifications" {
        major_credit_specification_id: String => Text,
        major_id: String => Text,
        major_credit_specification_name: String => Text,
        major_credit_specification_minimum_credit: i32 => Integer,
        major_credit_specification_created_timestamp: DateTime<Utc> => Timestamp,
    }
}
