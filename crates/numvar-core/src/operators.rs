use serde::{Deserialize, Serialize};

/// Canonical phone number width after normalization.
pub const PHONE_LEN: usize = 8;

/// A telecom operator and the numeric prefixes it may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    pub prefixes: Vec<String>,
}

/// Ordered operator -> prefix table.
///
/// Declaration order is significant: source cleaning scans operators (and
/// each operator's prefixes) in order and keeps the first match, so the
/// registry stores an ordered list rather than a map.
///
/// Prefixes across operators are assumed not to overlap ambiguously; the
/// registry does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRegistry {
    operators: Vec<Operator>,
}

impl OperatorRegistry {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// Built-in registry of Moldovan operators.
    pub fn moldova() -> Self {
        let table: &[(&str, &[&str])] = &[
            ("Orange", &["60", "61", "62", "63", "68", "69"]),
            ("Moldcell", &["76", "78", "79"]),
            ("Unite", &["67"]),
            ("Moldtelecom", &["2"]),
        ];
        Self {
            operators: table
                .iter()
                .map(|(name, prefixes)| Operator {
                    name: (*name).to_string(),
                    prefixes: prefixes.iter().map(|p| (*p).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Operators in declaration order.
    pub fn operators(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// Operator names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.iter().any(|op| op.name == name)
    }

    /// Registered prefixes for an operator, or `None` when the operator is
    /// unknown. Callers treat unknown operators as unclassifiable.
    pub fn prefixes_for(&self, name: &str) -> Option<&[String]> {
        self.operators
            .iter()
            .find(|op| op.name == name)
            .map(|op| op.prefixes.as_slice())
    }

    /// First `(operator, prefix)` pair whose prefix starts `number`,
    /// scanning operators and their prefixes in declaration order.
    pub fn matched_prefix<'a>(&'a self, number: &str) -> Option<(&'a str, &'a str)> {
        for operator in &self.operators {
            for prefix in &operator.prefixes {
                if number.starts_with(prefix.as_str()) {
                    return Some((operator.name.as_str(), prefix.as_str()));
                }
            }
        }
        None
    }

    /// First prefix of `operator` that starts `number`, or `None` when the
    /// operator is unknown or none of its prefixes match.
    pub fn matched_prefix_for<'a>(&'a self, operator: &str, number: &str) -> Option<&'a str> {
        self.prefixes_for(operator)?
            .iter()
            .find(|prefix| number.starts_with(prefix.as_str()))
            .map(|prefix| prefix.as_str())
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::moldova()
    }
}
