//! User accounts and their role-specific profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Role {
    /// Administrator.
    Admin,
    /// Enrolled student.
    Student,
    /// Teaching staff.
    Professor,
}

integer_enum!(Role, "role", {
    Admin = 0,
    Student = 1,
    Professor = 2,
});

table_record! {
    /// A login account.
    pub struct User in "users" {
        user_id: String => Text,
        user_username: String => Text,
        user_email: String => Text,
        user_password: String => Text,
        user_role: Role => Integer,
        user_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// Profile extension for a professor account; `professor_id` is the
    /// owning `user_id`.
    pub struct Professor in "professors" {
        professor_id: String => Text,
        professor_profile_image_path: String => Text,
        professor_birthdate: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// Profile extension for a student account; `student_id` is the owning
    /// `user_id`.
    pub struct Student in "students" {
        student_id: String => Text,
        student_representative_id: String => Text,
        student_profile_image_path: String => Text,
        student_nid: String => Text,
        student_birthdate: DateTime<Utc> => Timestamp,
        student_previous_school_name: String => Text,
        student_previous_school_gpa: f64 => Double,
        major_id: String => Text,
        professor_id: String => Text,
        first_academic_year_id: String => Text,
    }
}
