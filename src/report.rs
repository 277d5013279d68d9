use crate::filter::{Filter, NameFilter};
use colored::Colorize;
use serde::Serialize;

/// Outcome of running a batch of candidates through a filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub kind: String,
    pub has_filters: bool,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

impl FilterReport {
    /// Split `candidates` into included and excluded names, keeping input order.
    pub fn evaluate<F: Filter>(kind: &str, filter: &F, candidates: &[String]) -> Self {
        let (included, excluded): (Vec<String>, Vec<String>) = candidates
            .iter()
            .cloned()
            .partition(|name| filter.should_include(name));

        Self {
            kind: kind.to_string(),
            has_filters: filter.has_filters(),
            included,
            excluded,
        }
    }

    /// Included names, one per line
    pub fn to_text(&self) -> String {
        self.included
            .iter()
            .map(|name| format!("{}\n", name))
            .collect()
    }
}

/// Human readable summary of the effective rules
pub fn format_rules(filters: &[&NameFilter]) -> String {
    let mut out = String::new();
    for filter in filters {
        let line = if !filter.includes().is_empty() {
            format!("include {}", filter.includes().join(", "))
        } else if !filter.excludes().is_empty() {
            format!("exclude {}", filter.excludes().join(", "))
        } else {
            "(no filters)".dimmed().to_string()
        };
        out.push_str(&format!("{:<12} {}\n", filter.kind().bold(), line));
    }
    out
}

/// Effective rules of one filter, as stored after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesSummary {
    pub kind: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl From<&NameFilter> for RulesSummary {
    fn from(filter: &NameFilter) -> Self {
        let owned = |names: Vec<&str>| -> Vec<String> {
            names.into_iter().map(str::to_string).collect()
        };
        Self {
            kind: filter.kind().to_string(),
            include: owned(filter.includes()),
            exclude: owned(filter.excludes()),
        }
    }
}

pub fn rules_json(filters: &[&NameFilter]) -> serde_json::Result<String> {
    let summaries: Vec<RulesSummary> = filters
        .iter()
        .map(|filter| RulesSummary::from(*filter))
        .collect();
    serde_json::to_string_pretty(&summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{new_component_filter, new_kind_filter};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_preserves_input_order() {
        let filter = new_kind_filter(Vec::<String>::new(), ["secret"]).unwrap();
        let candidates = names(&["Pod", "Secrets", "service"]);
        let report = FilterReport::evaluate(filter.kind(), &filter, &candidates);

        assert_eq!(report.kind, "kinds");
        assert!(report.has_filters);
        assert_eq!(report.included, names(&["Pod", "service"]));
        assert_eq!(report.excluded, names(&["Secrets"]));
        assert_eq!(report.to_text(), "Pod\nservice\n");
    }

    #[test]
    fn test_evaluate_without_rules_keeps_everything() {
        let filter = new_component_filter(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        let report = FilterReport::evaluate(filter.kind(), &filter, &names(&["a", "b"]));

        assert!(!report.has_filters);
        assert_eq!(report.included, names(&["a", "b"]));
        assert!(report.excluded.is_empty());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let filter = new_component_filter(["a"], Vec::<String>::new()).unwrap();
        let report = FilterReport::evaluate(filter.kind(), &filter, &names(&["a", "b"]));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "kind": "components",
                "has_filters": true,
                "included": ["a"],
                "excluded": ["b"]
            })
        );
    }

    #[test]
    fn test_format_rules_lists_names() {
        let components = new_component_filter(["b", "a"], Vec::<String>::new()).unwrap();
        let kinds = new_kind_filter(Vec::<String>::new(), ["Secret"]).unwrap();
        let text = format_rules(&[&components, &kinds]);

        assert!(text.contains("include a, b"));
        assert!(text.contains("exclude secret"));
    }

    #[test]
    fn test_rules_json_uses_normalized_names() {
        let components =
            new_component_filter(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        let kinds = new_kind_filter(Vec::<String>::new(), ["Secret", "secret", "Pod"]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&rules_json(&[&components, &kinds]).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "components", "include": [], "exclude": []},
                {"kind": "kinds", "include": [], "exclude": ["pod", "secret"]}
            ])
        );
    }

    #[test]
    fn test_evaluate_accepts_trait_objects() {
        let filter: Box<dyn Filter> =
            Box::new(new_component_filter(["a"], Vec::<String>::new()).unwrap());
        let report = FilterReport::evaluate("components", &filter, &names(&["a", "b"]));

        assert_eq!(report.included, names(&["a"]));
        assert_eq!(report.excluded, names(&["b"]));
    }
}
