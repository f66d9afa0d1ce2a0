pub mod geo;

pub use geo::*;

use rayon::prelude::*;
use regex::{Regex, RegexBuilder};
use tracing::debug;

pub trait Searchable {
    fn customer_name(&self) -> &str;
    fn delivery_address(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn customer_name(&self) -> &str {
        (**self).customer_name()
    }

    fn delivery_address(&self) -> &str {
        (**self).delivery_address()
    }
}

/// Compiles a case-insensitive pattern from user input.
/// Input that is not a valid expression is matched literally.
pub fn pattern(needle: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(needle)
        .case_insensitive(true)
        .build()
        .or_else(|err| {
            debug!("Query {needle:?} is not a valid pattern ({err}), matching literally");
            RegexBuilder::new(&regex::escape(needle))
                .case_insensitive(true)
                .build()
        })
}

/// Parallel scan over the haystack, results keep haystack order.
pub fn search<'a, T>(pattern: &Regex, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Searchable,
{
    haystack
        .par_iter()
        .filter(|hay| {
            pattern.is_match(hay.customer_name()) || pattern.is_match(hay.delivery_address())
        })
        .collect()
}
