// Benchmark identity: the (group, case) pair Criterion uses to lay out
// target/criterion/<group>/<case>/.

use std::fmt;

/// Composite key naming one measured operation
///
/// Ordering is lexicographic by group, then case. That ordering is what the
/// loader traverses in and what [`crate::regression::EstimateSet`] iterates in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchmarkId {
    pub group: String,
    pub case: String,
}

impl BenchmarkId {
    pub const SEPARATOR: char = '/';

    pub fn new(group: impl Into<String>, case: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            case: case.into(),
        }
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, Self::SEPARATOR, self.case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_slash() {
        assert_eq!(BenchmarkId::new("db", "insert_1k").to_string(), "db/insert_1k");
    }

    #[test]
    fn test_ordering_is_group_then_case() {
        let mut ids = vec![
            BenchmarkId::new("b", "a"),
            BenchmarkId::new("a", "z"),
            BenchmarkId::new("a", "b"),
        ];
        ids.sort();
        let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a/b", "a/z", "b/a"]);
    }
}
