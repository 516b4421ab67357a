use std::fmt;

/// A reflected foreign key: source columns referencing columns on a target
/// table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKey {
    /// Columns on the declaring table
    pub columns: Vec<String>,

    /// The referenced table
    pub target_table: String,

    /// The referenced columns, positionally matching `columns`
    pub target_columns: Vec<String>,
}

impl ForeignKey {
    /// Single-column foreign key, the common case.
    pub fn new(
        column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            columns: vec![column.into()],
            target_table: target_table.into(),
            target_columns: vec![target_column.into()],
        }
    }

    /// Composite foreign key.
    pub fn composite<I, J>(columns: I, target_table: impl Into<String>, target_columns: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            target_table: target_table.into(),
            target_columns: target_columns.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any source column matches `column`.
    pub fn uses_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// True if any referenced column matches `column`.
    pub fn references_column(&self, column: &str) -> bool {
        self.target_columns.iter().any(|c| c == column)
    }

    /// Human-readable `a, b -> t.x, y` description, used in diagnostics.
    pub fn describe(&self) -> String {
        format!(
            "{} -> {}.{}",
            self.columns.join(", "),
            self.target_table,
            self.target_columns.join(", ")
        )
    }
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
