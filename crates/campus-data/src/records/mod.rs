//! Flat relational records, one type per destination table.
//!
//! Records are plain data: every field is a column, declared in column
//! order, so the derived JSON and the SQL row agree with the table schema.

/// Declare a record struct together with its [`TableRecord`] schema.
///
/// Each field is annotated with its [`ColumnKind`]; the macro emits the
/// struct, a static [`TableSchema`] listing the columns in declaration order,
/// and a `row` builder returning the values in the same order.
///
/// [`TableRecord`]: crate::schema::TableRecord
/// [`ColumnKind`]: crate::schema::ColumnKind
/// [`TableSchema`]: crate::schema::TableSchema
macro_rules! table_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in $table:literal {
            $( $field:ident : $ty:ty => $kind:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[doc = concat!("`", stringify!($field), "` column.")]
                pub $field: $ty,
            )+
        }

        impl $crate::schema::TableRecord for $name {
            fn schema() -> &'static $crate::schema::TableSchema {
                static SCHEMA: $crate::schema::TableSchema = $crate::schema::TableSchema {
                    name: $table,
                    columns: &[
                        $(
                            $crate::schema::Column::new(
                                stringify!($field),
                                $crate::schema::ColumnKind::$kind,
                            ),
                        )+
                    ],
                };
                &SCHEMA
            }

            fn row(&self) -> Vec<$crate::schema::SqlValue> {
                use $crate::schema::ToSqlValue as _;
                vec![$(self.$field.to_sql_value()),+]
            }
        }
    };
}

/// Implement integer serialisation and [`ToSqlValue`] for a fieldless enum.
///
/// [`ToSqlValue`]: crate::schema::ToSqlValue
macro_rules! integer_enum {
    ($name:ident, $label:literal, { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::UnknownDiscriminant;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err($crate::error::UnknownDiscriminant {
                        kind: $label,
                        value: other,
                    }),
                }
            }
        }

        impl $crate::schema::ToSqlValue for $name {
            fn to_sql_value(&self) -> $crate::schema::SqlValue {
                $crate::schema::SqlValue::Integer(i32::from(*self))
            }
        }
    };
}

pub mod calendar;
pub mod curriculum;
pub mod facilities;
pub mod forum;
pub mod people;
pub mod teaching;

pub use calendar::{AcademicYear, Semester};
pub use curriculum::{Curriculum, Faculty, Major, MajorCreditSpecification};
pub use facilities::{Building, Room};
pub use forum::{
    ForumCategory, ForumPost, ForumPostReply, ForumPostReplyVote, ForumPostView, ForumPostVote,
};
pub use people::{Professor, Role, Student, User};
pub use teaching::{DayOfWeek, GradingCriteria, GradingCriteriaGrade, Subject, SubjectSchedule};
