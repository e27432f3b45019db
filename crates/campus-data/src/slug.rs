//! Slugs for forum category representative IDs.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens.

/// Return `true` when `value` is a valid slug.
///
/// # Examples
///
/// ```
/// use campus_data::is_valid_slug;
///
/// assert!(is_valid_slug("global-announcements"));
/// assert!(!is_valid_slug("Global Announcements"));
/// assert!(!is_valid_slug(""));
/// ```
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Turn a display name into a slug.
///
/// ASCII letters are lowercased, digits are kept and every run of other
/// characters collapses into a single hyphen. Leading and trailing hyphens
/// are dropped.
///
/// # Examples
///
/// ```
/// use campus_data::slugify;
///
/// assert_eq!(slugify("Global Announcements"), "global-announcements");
/// assert_eq!(slugify("  Help!  "), "help");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Help", "help")]
    #[case("Homeworks", "homeworks")]
    #[case("Global Announcements", "global-announcements")]
    #[case("C++ & Rust -- 2024", "c-rust-2024")]
    #[case("***", "")]
    fn slugifies_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[rstest]
    #[case("memes", true)]
    #[case("year-2024", true)]
    #[case(" memes", false)]
    #[case("Memes", false)]
    #[case("memes_and_more", false)]
    fn validates_slugs(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }

    #[rstest]
    #[case("Advertisements")]
    #[case("Global Announcements")]
    fn slugify_output_is_valid(#[case] name: &str) {
        assert!(is_valid_slug(&slugify(name)));
    }
}
