//! Whole-dataset assembly in foreign-key order.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::faker::Faker;
use crate::generator::calendar::{generate_academic_years, generate_semesters};
use crate::generator::curriculum::{
    generate_curriculums, generate_faculties, generate_major_credit_specifications,
    generate_majors,
};
use crate::generator::facilities::{generate_buildings, generate_rooms};
use crate::generator::forum::{
    PostVolumes, generate_forum_categories, generate_forum_post_replies,
    generate_forum_post_reply_votes, generate_forum_post_views, generate_forum_post_votes,
    generate_forum_posts,
};
use crate::generator::people::{generate_admins, generate_professors, generate_students};
use crate::generator::teaching::{
    generate_grading_criteria_grades, generate_grading_criterias, generate_subject_schedules,
    generate_subjects,
};
use crate::records::{
    AcademicYear, Building, Curriculum, Faculty, ForumCategory, ForumPost, ForumPostReply,
    ForumPostReplyVote, ForumPostView, ForumPostVote, GradingCriteria, GradingCriteriaGrade,
    Major, MajorCreditSpecification, Professor, Room, Semester, Student, Subject,
    SubjectSchedule, User,
};
use crate::schema::TableBatch;

/// Every generated table of a seed run.
#[derive(Debug, Clone, PartialEq)]
#[expect(missing_docs, reason = "fields are named after their tables")]
pub struct Dataset {
    pub faculties: Vec<Faculty>,
    pub curriculums: Vec<Curriculum>,
    pub majors: Vec<Major>,
    pub major_credit_specifications: Vec<MajorCreditSpecification>,
    pub academic_years: Vec<AcademicYear>,
    pub semesters: Vec<Semester>,
    pub users: Vec<User>,
    pub professors: Vec<Professor>,
    pub students: Vec<Student>,
    pub buildings: Vec<Building>,
    pub rooms: Vec<Room>,
    pub subjects: Vec<Subject>,
    pub subject_schedules: Vec<SubjectSchedule>,
    pub grading_criterias: Vec<GradingCriteria>,
    pub grading_criteria_grades: Vec<GradingCriteriaGrade>,
    pub forum_categories: Vec<ForumCategory>,
    pub forum_posts: Vec<ForumPost>,
    pub forum_post_replies: Vec<ForumPostReply>,
    pub forum_post_views: Vec<ForumPostView>,
    pub forum_post_votes: Vec<ForumPostVote>,
    pub forum_post_reply_votes: Vec<ForumPostReplyVote>,
}

/// Generate every table for `config`.
///
/// The same configuration always produces the same dataset.
///
/// # Errors
///
/// Propagates the first [`GenerationError`] raised by a generator.
///
/// # Example
///
/// ```
/// use campus_data::{GenerationConfig, generate_dataset};
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
/// let config = GenerationConfig::new(7, now)
///     .with_student_count(10)
///     .with_post_count(5)
///     .with_deactivated_announcement_counts(2, 2);
/// let dataset = generate_dataset(&config).expect("generation succeeds");
///
/// assert_eq!(dataset.students.len(), 10);
/// assert_eq!(dataset.faculties.len(), 6);
/// ```
pub fn generate_dataset(config: &GenerationConfig) -> Result<Dataset, GenerationError> {
    let mut faker = Faker::new(config);

    let faculties = generate_faculties(&mut faker, config.faculty_count());
    let curriculums =
        generate_curriculums(&mut faker, &faculties, config.curriculums_per_faculty());
    let majors = generate_majors(&mut faker, &curriculums, config.majors_per_curriculum())?;
    let major_credit_specifications = generate_major_credit_specifications(
        &mut faker,
        &majors,
        config.credit_specifications_per_major(),
    );

    let academic_years = generate_academic_years(&mut faker, config.academic_years());
    let semesters = generate_semesters(&mut faker, &academic_years);

    let admins = generate_admins(&mut faker, config.admin_count());
    let (professor_users, professors): (Vec<User>, Vec<Professor>) =
        generate_professors(&mut faker, config.professor_count())
            .into_iter()
            .unzip();
    let (student_users, students): (Vec<User>, Vec<Student>) = generate_students(
        &mut faker,
        &majors,
        &academic_years,
        &professors,
        config.student_count(),
    )?
    .into_iter()
    .unzip();
    let mut users = admins;
    users.extend(professor_users);
    users.extend(student_users);

    let buildings = generate_buildings(
        &mut faker,
        config.building_count(),
        config.campus_center(),
    );
    let rooms = generate_rooms(&mut faker, &buildings);

    let subjects = generate_subjects(&mut faker, config.subject_count());
    let subject_schedules =
        generate_subject_schedules(&mut faker, &subjects, config.schedules_per_subject());
    let grading_criterias = generate_grading_criterias(&mut faker, &users)?;
    let grading_criteria_grades = generate_grading_criteria_grades(&mut faker, &grading_criterias);

    let forum_categories = generate_forum_categories(&mut faker, &users)?;
    let volumes = PostVolumes {
        ordinary: config.post_count(),
        deactivated_category_announcements: config.deactivated_category_announcement_count(),
        deactivated_global_announcements: config.deactivated_global_announcement_count(),
    };
    let mut forum_posts = generate_forum_posts(&mut faker, &users, &forum_categories, volumes)?;
    let forum_post_replies = generate_forum_post_replies(&mut faker, &users, &mut forum_posts);
    let forum_post_views = generate_forum_post_views(&mut faker, &users, &forum_posts);
    let forum_post_votes = generate_forum_post_votes(&mut faker, &forum_posts, &forum_post_views);
    let forum_post_reply_votes =
        generate_forum_post_reply_votes(&mut faker, &users, &forum_post_replies);

    Ok(Dataset {
        faculties,
        curriculums,
        majors,
        major_credit_specifications,
        academic_years,
        semesters,
        users,
        professors,
        students,
        buildings,
        rooms,
        subjects,
        subject_schedules,
        grading_criterias,
        grading_criteria_grades,
        forum_categories,
        forum_posts,
        forum_post_replies,
        forum_post_views,
        forum_post_votes,
        forum_post_reply_votes,
    })
}

impl Dataset {
    /// Every table as a [`TableBatch`], parents before children.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Serialization`] when a table cannot be
    /// rendered to JSON.
    pub fn batches(&self) -> Result<Vec<TableBatch>, GenerationError> {
        Ok(vec![
            TableBatch::from_records(&self.faculties)?,
            TableBatch::from_records(&self.curriculums)?,
            TableBatch::from_records(&self.majors)?,
            TableBatch::from_records(&self.major_credit_specifications)?,
            TableBatch::from_records(&self.academic_years)?,
            TableBatch::from_records(&self.semesters)?,
            TableBatch::from_records(&self.users)?,
            TableBatch::from_records(&self.professors)?,
            TableBatch::from_records(&self.students)?,
            TableBatch::from_records(&self.buildings)?,
            TableBatch::from_records(&self.rooms)?,
            TableBatch::from_records(&self.subjects)?,
            TableBatch::from_records(&self.subject_schedules)?,
            TableBatch::from_records(&self.grading_criterias)?,
            TableBatch::from_records(&self.grading_criteria_grades)?,
            TableBatch::from_records(&self.forum_categories)?,
            TableBatch::from_records(&self.forum_posts)?,
            TableBatch::from_records(&self.forum_post_replies)?,
            TableBatch::from_records(&self.forum_post_views)?,
            TableBatch::from_records(&self.forum_post_votes)?,
            TableBatch::from_records(&self.forum_post_reply_votes)?,
        ])
    }
}
