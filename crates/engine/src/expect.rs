// crates/engine/src/expect.rs
//! Expected line counts, e.g. the observation counts of a dataset report,
//! checked against what was actually counted.

use crate::error::Result;
use crate::stats::FileCount;
use linecheck_shared_kernel::LineCount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Expected counts keyed by input label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expectations(BTreeMap<String, LineCount>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    Mismatch {
        label: String,
        path: PathBuf,
        expected: LineCount,
        actual: LineCount,
    },
    /// Expected a count for this label but none was produced.
    Missing { label: String },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                label,
                path,
                expected,
                actual,
            } => write!(
                f,
                "{label}: expected {expected} lines, counted {actual} in {}",
                path.display()
            ),
            Self::Missing { label } => write!(f, "{label}: expected a count but none was produced"),
        }
    }
}

impl Expectations {
    /// # Errors
    /// Fails when the file cannot be read or is not a `label: count` mapping.
    pub fn load(path: &Path) -> Result<Self> {
        let expectations: Self = crate::document::load(path)?;
        log::debug!(
            "loaded {} expected counts from {}",
            expectations.0.len(),
            path.display()
        );
        Ok(expectations)
    }

    pub fn insert(&mut self, label: impl Into<String>, lines: impl Into<LineCount>) {
        self.0.insert(label.into(), lines.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare `counts` with the expected values. Mismatches come first, in
    /// the order of `counts`, then labels that were never counted.
    pub fn check(&self, counts: &[FileCount]) -> Vec<Discrepancy> {
        let mut found = Vec::new();

        for count in counts {
            match self.0.get(&count.label) {
                Some(&expected) if expected != count.lines => found.push(Discrepancy::Mismatch {
                    label: count.label.clone(),
                    path: count.path.clone(),
                    expected,
                    actual: count.lines,
                }),
                Some(_) => {}
                None => log::debug!("no expected count for '{}'", count.label),
            }
        }

        for label in self.0.keys() {
            if !counts.iter().any(|c| &c.label == label) {
                found.push(Discrepancy::Missing {
                    label: label.clone(),
                });
            }
        }

        found
    }
}

impl<L: Into<String>, C: Into<LineCount>> FromIterator<(L, C)> for Expectations {
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, lines)| (label.into(), lines.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn counted(label: &str, lines: usize) -> FileCount {
        FileCount {
            label: label.to_string(),
            path: PathBuf::from(format!("{label}.csv")),
            lines: LineCount::from(lines),
        }
    }

    #[test]
    fn matching_counts_have_no_discrepancies() {
        let expected: Expectations = [("bookings", 10usize), ("loyalty", 4)].into_iter().collect();
        let counts = [counted("bookings", 10), counted("loyalty", 4)];
        assert!(expected.check(&counts).is_empty());
    }

    #[test]
    fn reports_mismatch_then_missing() {
        let expected: Expectations = [("bookings", 10usize), ("households", 7), ("loyalty", 4)]
            .into_iter()
            .collect();
        let counts = [counted("bookings", 11), counted("loyalty", 4)];

        let found = expected.check(&counts);
        assert_eq!(
            found,
            vec![
                Discrepancy::Mismatch {
                    label: "bookings".into(),
                    path: PathBuf::from("bookings.csv"),
                    expected: LineCount::from(10),
                    actual: LineCount::from(11),
                },
                Discrepancy::Missing {
                    label: "households".into()
                },
            ]
        );
        assert_eq!(
            found[0].to_string(),
            "bookings: expected 10 lines, counted 11 in bookings.csv"
        );
    }

    #[test]
    fn unlisted_labels_are_ignored() {
        let expected: Expectations = [("bookings", 1usize)].into_iter().collect();
        let counts = [counted("bookings", 1), counted("extra", 99)];
        assert!(expected.check(&counts).is_empty());
    }

    #[test]
    fn loads_yaml_mapping() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        writeln!(file, "bookings: 1001\ndestinations: 51").unwrap();

        let loaded = Expectations::load(file.path()).unwrap();
        let mut expected = Expectations::default();
        expected.insert("bookings", 1001usize);
        expected.insert("destinations", 51usize);
        assert_eq!(loaded, expected);
    }
}
