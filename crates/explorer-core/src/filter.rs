// crates/explorer-core/src/filter.rs

//! # Filter Engine
//!
//! Pure narrowing of an in-memory country collection. No I/O, no state;
//! results keep the input order.

use crate::model::Country;
use std::collections::BTreeSet;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive helpers for free.
///
/// # Examples
/// ```rust
/// use explorer_core::filter::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Germany").is_named("GERMANY"));
/// assert!(Place("United Kingdom").name_contains("king"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().to_lowercase() == q.to_lowercase()
    }

    /// Case-insensitive substring match. An empty `q` matches everything.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str().to_lowercase().contains(&q.to_lowercase())
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        self.common_name()
    }
}

/// Countries whose common name contains `query` (case-insensitive) AND whose
/// region equals `region` exactly; an empty `region` disables that check.
///
/// `filter_countries(cs, "", "")` returns `cs` unchanged.
pub fn filter_countries(countries: &[Country], query: &str, region: &str) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| c.name_contains(query))
        .filter(|c| region.is_empty() || c.region == region)
        .cloned()
        .collect()
}

/// Unique non-empty regions, sorted lexicographically.
pub fn available_regions(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.region.as_str())
        .filter(|r| !r.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The country whose common name equals `name`, ignoring case.
pub fn find_by_name<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    let name = name.trim();
    countries.iter().find(|c| c.is_named(name))
}

/// Looks up a country in a loaded collection by `cca3`/`cca2`, ignoring case.
pub fn find_by_code<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    let code = code.trim();
    countries.iter().find(|c| {
        c.cca3.eq_ignore_ascii_case(code)
            || c.cca2
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn country(name: &str, region: &str, code: &str) -> Country {
        let mut c = Country::default();
        c.name.common = name.to_string();
        c.region = region.to_string();
        c.cca3 = code.to_string();
        c
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Germany", "Europe", "DEU"),
            country("Japan", "Asia", "JPN"),
            country("Nigeria", "Africa", "NGA"),
            country("Niger", "Africa", "NER"),
            country("Antarctica", "", "ATA"),
        ]
    }

    #[test]
    fn no_filters_is_identity() {
        let cs = sample();
        assert_eq!(filter_countries(&cs, "", ""), cs);
    }

    #[test]
    fn query_and_region_must_both_hold() {
        let cs = sample();
        let names: Vec<_> = filter_countries(&cs, "NIG", "Africa")
            .into_iter()
            .map(|c| c.name.common)
            .collect();
        assert_eq!(names, ["Nigeria", "Niger"]);
        assert!(filter_countries(&cs, "nig", "Asia").is_empty());
        assert_eq!(filter_countries(&cs, "", "Asia")[0].cca3, "JPN");
    }

    #[test]
    fn exact_name_lookup_prefers_whole_name() {
        let cs = sample();
        assert_eq!(find_by_name(&cs, " niger ").map(|c| c.cca3.as_str()), Some("NER"));
        assert_eq!(find_by_name(&cs, "NIGERIA").map(|c| c.cca3.as_str()), Some("NGA"));
        assert!(find_by_name(&cs, "Nig").is_none());
    }

    #[test]
    fn region_is_exact_match() {
        let cs = sample();
        assert!(filter_countries(&cs, "", "europe").is_empty());
        assert!(filter_countries(&cs, "", "Eur").is_empty());
    }

    #[test]
    fn regions_are_unique_sorted_non_empty() {
        assert_eq!(available_regions(&sample()), ["Africa", "Asia", "Europe"]);
        assert!(available_regions(&[]).is_empty());
    }

    #[test]
    fn code_lookup_ignores_case() {
        let cs = sample();
        assert_eq!(find_by_code(&cs, "jpn").map(|c| c.common_name()), Some("Japan"));
        assert!(find_by_code(&cs, "XXX").is_none());
    }

    fn arb_country() -> impl Strategy<Value = Country> {
        (
            "[A-Za-z ]{0,12}",
            prop::sample::select(vec!["", "Africa", "Americas", "Asia", "Europe"]),
        )
            .prop_map(|(name, region)| country(&name, region, "XXX"))
    }

    proptest! {
        #[test]
        fn result_is_a_matching_subset(
            cs in prop::collection::vec(arb_country(), 0..40),
            q in "[A-Za-z]{0,3}",
            region in prop::sample::select(vec!["", "Africa", "Asia", "Europe"]),
        ) {
            let out = filter_countries(&cs, &q, region);
            prop_assert!(out.len() <= cs.len());
            for c in &out {
                prop_assert!(c.common_name().to_lowercase().contains(&q.to_lowercase()));
                prop_assert!(region.is_empty() || c.region == region);
            }
            // Order preserved: `out` is a subsequence of `cs`.
            let mut it = cs.iter();
            for c in &out {
                prop_assert!(it.any(|x| x == c));
            }
        }
    }
}
