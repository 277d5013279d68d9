use super::alias::identity_aliases;
use super::error::FilterError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Decides whether a candidate name should be included
pub trait Filter: Send + Sync {
    /// Returns true if any include or exclude rule is configured
    fn has_filters(&self) -> bool;

    /// Returns true if the supplied name passes the filter
    fn should_include(&self, candidate: &str) -> bool;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn has_filters(&self) -> bool {
        (**self).has_filters()
    }

    fn should_include(&self, candidate: &str) -> bool {
        (**self).should_include(candidate)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn has_filters(&self) -> bool {
        (**self).has_filters()
    }

    fn should_include(&self, candidate: &str) -> bool {
        (**self).should_include(candidate)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn has_filters(&self) -> bool {
        (**self).has_filters()
    }

    fn should_include(&self, candidate: &str) -> bool {
        (**self).should_include(candidate)
    }
}

/// Expands a candidate into the aliases probed against the rule sets, in
/// priority order
pub type AliasFn = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Include/exclude filter over a set of names
///
/// At most one of the include and exclude sets is non-empty. The filter is
/// immutable once built.
pub struct NameFilter {
    kind: String,
    includes: HashSet<String>,
    excludes: HashSet<String>,
    alias_fn: AliasFn,
}

impl NameFilter {
    /// Build a filter for the entities described by the plural label `kind`.
    ///
    /// Fails when both `includes` and `excludes` are non-empty. When no alias
    /// function is supplied candidates are matched as-is.
    pub fn new<I, E>(
        kind: &str,
        includes: I,
        excludes: E,
        alias_fn: Option<AliasFn>,
    ) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = to_set(includes);
        let excludes = to_set(excludes);

        if !includes.is_empty() && !excludes.is_empty() {
            return Err(FilterError::Conflicting {
                kind: kind.to_string(),
            });
        }

        tracing::debug!(
            kind,
            includes = includes.len(),
            excludes = excludes.len(),
            "built filter"
        );

        Ok(Self {
            kind: kind.to_string(),
            includes,
            excludes,
            alias_fn: alias_fn.unwrap_or_else(|| Box::new(identity_aliases)),
        })
    }

    /// Plural label of the filtered entities, e.g. "components"
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Configured include names, sorted
    pub fn includes(&self) -> Vec<&str> {
        sorted(&self.includes)
    }

    /// Configured exclude names, sorted
    pub fn excludes(&self) -> Vec<&str> {
        sorted(&self.excludes)
    }
}

impl Filter for NameFilter {
    fn has_filters(&self) -> bool {
        !self.includes.is_empty() || !self.excludes.is_empty()
    }

    fn should_include(&self, candidate: &str) -> bool {
        for alias in (self.alias_fn)(candidate) {
            if self.includes.contains(&alias) {
                tracing::trace!(kind = %self.kind, candidate, %alias, "included");
                return true;
            }
            if self.excludes.contains(&alias) {
                tracing::trace!(kind = %self.kind, candidate, %alias, "excluded");
                return false;
            }
        }
        self.includes.is_empty()
    }
}

impl fmt::Debug for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameFilter")
            .field("kind", &self.kind)
            .field("includes", &self.includes())
            .field("excludes", &self.excludes())
            .finish_non_exhaustive()
    }
}

fn to_set<L>(list: L) -> HashSet<String>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    list.into_iter().map(|s| s.as_ref().to_string()).collect()
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut names: Vec<&str> = set.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}
