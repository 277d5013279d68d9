//! Include/exclude filtering of named entities
//!
//! A filter is built from an include list or an exclude list (never both) and
//! then asked, once per candidate, whether that candidate should be kept.
//!
//! # Rules
//!
//! ```text
//! no includes, no excludes   everything passes
//! includes only              only names in the list pass
//! excludes only              everything except names in the list passes
//! includes and excludes      rejected at construction
//! ```
//!
//! Each candidate is first expanded into aliases. Aliases are probed in order
//! and the first one found in either list decides the outcome.
//!
//! # Filter Flavours
//!
//! - [`new_component_filter`] - exact, case-sensitive names
//! - [`new_kind_filter`] - case-insensitive, also matches the naive plural
//!
//! # Examples
//!
//! ```
//! use entity_filter::filter::{Filter, new_kind_filter};
//!
//! let kinds = new_kind_filter(["Pod"], Vec::<String>::new()).unwrap();
//! assert!(kinds.should_include("POD"));
//! assert!(kinds.should_include("pods"));
//! assert!(!kinds.should_include("service"));
//! ```

pub mod alias;
pub mod error;
pub mod matcher;

pub use alias::{identity_aliases, kind_aliases, pluralize};
pub use error::FilterError;
pub use matcher::{AliasFn, Filter, NameFilter};

/// Returns a filter for component names.
pub fn new_component_filter<I, E>(includes: I, excludes: E) -> Result<NameFilter, FilterError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    E: IntoIterator,
    E::Item: AsRef<str>,
{
    NameFilter::new("components", includes, excludes, None)
}

/// Returns a filter for object kinds that ignores case and takes
/// pluralization into account.
pub fn new_kind_filter<I, E>(includes: I, excludes: E) -> Result<NameFilter, FilterError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    E: IntoIterator,
    E::Item: AsRef<str>,
{
    NameFilter::new(
        "kinds",
        lowercase_all(includes),
        lowercase_all(excludes),
        Some(Box::new(kind_aliases)),
    )
}

fn lowercase_all<L>(list: L) -> Vec<String>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    list.into_iter().map(|s| s.as_ref().to_lowercase()).collect()
}
