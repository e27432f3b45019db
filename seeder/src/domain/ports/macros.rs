//! Helper macro for declaring port error enums with snake-case constructors.

/// Declare a `thiserror` enum whose variants each get a constructor named
/// after the variant in snake case. Constructor parameters accept anything
/// convertible into the field type.
macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build a [`Self::", stringify!($variant), "`] error.")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            #[doc = concat!("Build a [`Self::", stringify!($variant), "`] error.")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),+ } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),+ } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SampleSinkError {
            Offline => "sink offline",
            Rejected { table: String } => "rows for {table} were rejected",
            Partial { table: String, written: usize } => "{table}: only {written} rows written",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SampleSinkError::offline().to_string(), "sink offline");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SampleSinkError::rejected("rooms");
        assert_eq!(err, SampleSinkError::Rejected { table: "rooms".to_owned() });
        assert_eq!(err.to_string(), "rows for rooms were rejected");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SampleSinkError::partial("subjects", 3_usize);
        assert_eq!(err.to_string(), "subjects: only 3 rows written");
    }
}
