//! Seeded randomness shared by every generator.
//!
//! [`Faker`] wraps a [`ChaCha8Rng`] together with the reference time and the
//! identifier length, so generators never consult the wall clock or a global
//! RNG. The same configuration always yields the same records.

use chrono::{DateTime, Months, TimeDelta, Utc};
use fake::Fake;
use fake::faker::company::raw::{Buzzword, CatchPhrase, CompanyName, Industry, Profession};
use fake::faker::internet::raw::{FreeEmailProvider, Username};
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GenerationConfig;

/// Seeded source of identifiers, timestamps and fake text.
#[derive(Debug, Clone)]
pub struct Faker {
    rng: ChaCha8Rng,
    now: DateTime<Utc>,
    id_length: usize,
}

impl Faker {
    /// Create a faker seeded from the configuration.
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self::from_seed(config.seed(), config.reference_time(), config.id_length())
    }

    /// Create a faker from explicit parts.
    #[must_use]
    pub fn from_seed(seed: u64, now: DateTime<Utc>, id_length: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            now,
            id_length,
        }
    }

    /// Underlying RNG, for helpers that sample directly.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Reference "now" for the run.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Fixed-length alphanumeric identifier.
    ///
    /// Uniqueness is probabilistic; collisions are not checked.
    pub fn id(&mut self) -> String {
        random_id(&mut self.rng, self.id_length)
    }

    /// Uniform timestamp in `[start, end]`; returns `start` when the range is
    /// empty or inverted.
    pub fn between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span = (end - start).num_milliseconds();
        if span <= 0 {
            return start;
        }
        start + TimeDelta::milliseconds(self.rng.random_range(0..=span))
    }

    /// Uniform timestamp within the last `years` years.
    pub fn past_years(&mut self, years: u32) -> DateTime<Utc> {
        let start = self.years_ago(years);
        self.between(start, self.now)
    }

    /// The reference time shifted back by `years` years.
    #[must_use]
    pub fn years_ago(&self, years: u32) -> DateTime<Utc> {
        self.now
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(self.now)
    }

    /// Uniform integer in `[min, max]`.
    pub fn number(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Fair coin flip.
    pub fn boolean(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// A `+1` or `-1` vote increment.
    pub fn vote_increment(&mut self) -> i32 {
        if self.boolean() { 1 } else { -1 }
    }

    /// Pick one element, or `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Sample between `min` and `max` distinct elements without replacement.
    ///
    /// Bounds are clamped to the slice length, and the sampled elements keep
    /// no particular order.
    pub fn sample<'a, T>(&mut self, items: &'a [T], min: usize, max: usize) -> Vec<&'a T> {
        let clamped_min = min.min(items.len());
        let clamped_max = max.min(items.len());
        let amount = self.number(clamped_min, clamped_max);
        items.choose_multiple(&mut self.rng, amount).collect()
    }

    /// Random `#rrggbb` colour.
    pub fn hex_color(&mut self) -> String {
        let value: u32 = self.rng.random_range(0..=0x00FF_FFFF);
        format!("#{value:06x}")
    }

    /// Fake first name.
    pub fn first_name(&mut self) -> String {
        FirstName(EN).fake_with_rng(&mut self.rng)
    }

    /// Fake last name.
    pub fn last_name(&mut self) -> String {
        LastName(EN).fake_with_rng(&mut self.rng)
    }

    /// Username derived from a first and last name.
    pub fn username(&mut self, first: &str, last: &str) -> String {
        let style = self.number(0, 2);
        let suffix = self.number(1, 999);
        match style {
            0 => format!("{first}.{last}{suffix}"),
            1 => format!("{first}_{last}"),
            _ => {
                let fallback: String = Username(EN).fake_with_rng(&mut self.rng);
                format!("{fallback}{suffix}")
            }
        }
        .to_lowercase()
        .replace(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_'), "")
    }

    /// Email address derived from a first and last name.
    pub fn email(&mut self, first: &str, last: &str) -> String {
        let provider: String = FreeEmailProvider(EN).fake_with_rng(&mut self.rng);
        let suffix = self.number(1, 99);
        format!("{first}.{last}{suffix}@{provider}")
            .to_lowercase()
            .replace(|c: char| c.is_whitespace() || c == '\'', "")
    }

    /// Short product-like title.
    pub fn title(&mut self) -> String {
        let buzzword: String = Buzzword(EN).fake_with_rng(&mut self.rng);
        let industry: String = Industry(EN).fake_with_rng(&mut self.rng);
        format!("{} {industry}", capitalise(&buzzword))
    }

    /// Catch phrase, used for post titles.
    pub fn catch_phrase(&mut self) -> String {
        CatchPhrase(EN).fake_with_rng(&mut self.rng)
    }

    /// Company name.
    pub fn company_name(&mut self) -> String {
        CompanyName(EN).fake_with_rng(&mut self.rng)
    }

    /// Profession, used for major names.
    pub fn profession(&mut self) -> String {
        Profession(EN).fake_with_rng(&mut self.rng)
    }

    /// Single sentence of lorem text.
    pub fn sentence(&mut self, words: usize) -> String {
        Sentence(EN, words..words + 1).fake_with_rng(&mut self.rng)
    }

    /// Paragraph of `sentences` lorem sentences.
    pub fn paragraph(&mut self, sentences: usize) -> String {
        Paragraph(EN, sentences..sentences + 1).fake_with_rng(&mut self.rng)
    }
}

/// Fixed-length alphanumeric identifier drawn from `rng`.
///
/// # Example
///
/// ```
/// use campus_data::random_id;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let id = random_id(&mut rng, 32);
///
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn faker() -> Faker {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid time");
        Faker::from_seed(42, now, 32)
    }

    #[rstest]
    fn ids_have_configured_length(mut faker: Faker) {
        for _ in 0..50 {
            let id = faker.id();
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[rstest]
    fn between_stays_in_range(mut faker: Faker) {
        let start = faker.years_ago(2);
        let end = faker.now();
        for _ in 0..100 {
            let value = faker.between(start, end);
            assert!(value >= start && value <= end);
        }
    }

    #[rstest]
    fn between_returns_start_for_inverted_range(mut faker: Faker) {
        let start = faker.now();
        let end = faker.years_ago(1);
        assert_eq!(faker.between(start, end), start);
    }

    #[rstest]
    fn sample_draws_distinct_elements(mut faker: Faker) {
        let items: Vec<usize> = (0..30).collect();
        for _ in 0..50 {
            let sample = faker.sample(&items, 5, 10);
            let mut values: Vec<usize> = sample.into_iter().copied().collect();
            assert!((5..=10).contains(&values.len()));
            values.sort_unstable();
            values.dedup();
            assert!(values.len() >= 5, "sample contained duplicates");
        }
    }

    #[rstest]
    fn sample_clamps_to_population(mut faker: Faker) {
        let items = [1, 2, 3];
        let sample = faker.sample(&items, 20, 50);
        assert_eq!(sample.len(), 3);
    }

    #[rstest]
    fn pick_handles_empty_slice(mut faker: Faker) {
        let items: [u8; 0] = [];
        assert!(faker.pick(&items).is_none());
    }

    #[rstest]
    fn hex_colors_are_well_formed(mut faker: Faker) {
        let colour = faker.hex_color();
        assert_eq!(colour.len(), 7);
        assert!(colour.starts_with('#'));
        assert!(colour.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
    }

    #[rstest]
    fn vote_increments_are_unit(mut faker: Faker) {
        for _ in 0..20 {
            assert!(matches!(faker.vote_increment(), 1 | -1));
        }
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let now = Utc::now();
        let mut first = Faker::from_seed(9, now, 16);
        let mut second = Faker::from_seed(9, now, 16);
        assert_eq!(first.id(), second.id());
        assert_eq!(first.first_name(), second.first_name());
    }
}
