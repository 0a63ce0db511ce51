//! Algorithm registry: the fixed, ordered set of user-selectable algorithms.
//!
//! Selection is a tagged enum rather than a name-to-function map, so every
//! dispatch site is checked for exhaustiveness at compile time. Names are only
//! parsed at the edges (CLI flags, shell commands).

use std::fmt;
use std::str::FromStr;

use crate::error::ExecutionError;
use crate::search::SearchAlgorithm;
use crate::sorting::SortAlgorithm;

/// One entry of the algorithm choice list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

impl Algorithm {
    /// Name of the algorithm (e.g., "Quick Sort")
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.name(),
            Algorithm::Search(search) => search.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.description(),
            Algorithm::Search(search) => search.description(),
        }
    }

    /// Category (e.g., "sorting", "search")
    pub fn category(self) -> &'static str {
        match self {
            Algorithm::Sort(_) => "sorting",
            Algorithm::Search(_) => "search",
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, Algorithm::Search(_))
    }

    /// Verify correctness against randomized and hand-picked inputs
    pub fn verify(self) -> Result<(), String> {
        match self {
            Algorithm::Sort(sort) => sort.verify(),
            Algorithm::Search(search) => search.verify(),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Sort(SortAlgorithm::Bubble)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase alphanumerics only: "Quick Sort", "quick_sort" and "quick-sort" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Algorithm {
    type Err = ExecutionError;

    /// Accepts the display name in any case or separator style, with or
    /// without its "sort"/"search" suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(ExecutionError::UnknownAlgorithm(s.to_string()));
        }

        ALGORITHMS
            .iter()
            .copied()
            .find(|algo| {
                let full = normalize(algo.name());
                let short = full
                    .strip_suffix("sort")
                    .or_else(|| full.strip_suffix("search"))
                    .unwrap_or(full.as_str());
                wanted == full || wanted == short
            })
            .ok_or_else(|| ExecutionError::UnknownAlgorithm(s.to_string()))
    }
}

/// Every selectable algorithm, in display order.
pub const ALGORITHMS: [Algorithm; 7] = [
    Algorithm::Sort(SortAlgorithm::Bubble),
    Algorithm::Sort(SortAlgorithm::Insertion),
    Algorithm::Sort(SortAlgorithm::Selection),
    Algorithm::Sort(SortAlgorithm::Merge),
    Algorithm::Sort(SortAlgorithm::Quick),
    Algorithm::Sort(SortAlgorithm::Radix),
    Algorithm::Search(SearchAlgorithm::Linear),
];

/// Registry of the algorithms offered to the user
pub struct AlgorithmRegistry {
    algorithms: Vec<Algorithm>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register(&mut self, algo: Algorithm) {
        if !self.algorithms.contains(&algo) {
            self.algorithms.push(algo);
        }
    }

    pub fn all(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Result<Algorithm, ExecutionError> {
        let algo: Algorithm = name.parse()?;
        if self.algorithms.contains(&algo) {
            Ok(algo)
        } else {
            Err(ExecutionError::UnknownAlgorithm(name.to_string()))
        }
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<Algorithm> {
        self.algorithms
            .iter()
            .copied()
            .filter(|a| a.category() == category)
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    for algo in ALGORITHMS {
        registry.register(algo);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for algo in ALGORITHMS {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_parse_short_and_snake_case_names() {
        assert_eq!(
            "quick".parse::<Algorithm>().unwrap(),
            Algorithm::Sort(SortAlgorithm::Quick)
        );
        assert_eq!(
            "merge_sort".parse::<Algorithm>().unwrap(),
            Algorithm::Sort(SortAlgorithm::Merge)
        );
        assert_eq!(
            "Linear-Search".parse::<Algorithm>().unwrap(),
            Algorithm::Search(SearchAlgorithm::Linear)
        );
        assert_eq!(
            "linear".parse::<Algorithm>().unwrap(),
            Algorithm::Search(SearchAlgorithm::Linear)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Bogo Sort".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, ExecutionError::UnknownAlgorithm(name) if name == "Bogo Sort"));
        assert!("".parse::<Algorithm>().is_err());
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_registry_order_and_categories() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec![
                "Bubble Sort",
                "Insertion Sort",
                "Selection Sort",
                "Merge Sort",
                "Quick Sort",
                "Radix Sort",
                "Linear Search"
            ]
        );
        assert_eq!(registry.by_category("sorting").len(), 6);
        assert_eq!(
            registry.by_category("search"),
            vec![Algorithm::Search(SearchAlgorithm::Linear)]
        );
    }

    #[test]
    fn test_registry_find() {
        let registry = build_registry();
        assert_eq!(
            registry.find("radix").unwrap(),
            Algorithm::Sort(SortAlgorithm::Radix)
        );
        assert!(registry.find("heap").is_err());
        assert!(AlgorithmRegistry::new().find("radix").is_err());
    }

    #[test]
    fn test_default_is_bubble() {
        assert_eq!(Algorithm::default().name(), "Bubble Sort");
    }
}
