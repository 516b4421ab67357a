use super::{Error, ErrorKind};

/// Error when an association table does not have the foreign-key shape the
/// declared relationship kind requires.
#[derive(Debug)]
pub(super) struct MalformedAssociationTableError {
    table: Box<str>,
    pub(super) kind: MalformedAssociationTableKind,
}

#[derive(Debug)]
pub(crate) enum MalformedAssociationTableKind {
    /// An association table must have exactly two foreign keys.
    ForeignKeyCount { found: usize },

    /// The foreign keys do not reference the tables being related.
    TargetMismatch {
        expected: Box<str>,
        required: usize,
        matched: usize,
    },
}

impl Error {
    pub(crate) fn malformed_association_table(
        table: impl Into<Box<str>>,
        kind: MalformedAssociationTableKind,
    ) -> Error {
        Error::from(ErrorKind::MalformedAssociationTable(
            MalformedAssociationTableError {
                table: table.into(),
                kind,
            },
        ))
    }
}

impl std::error::Error for MalformedAssociationTableError {}

impl core::fmt::Display for MalformedAssociationTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use MalformedAssociationTableKind::*;

        write!(f, "association table `{}` ", self.table)?;

        match &self.kind {
            ForeignKeyCount { found } => {
                write!(f, "must have exactly two foreign keys, found {found}")
            }
            TargetMismatch {
                expected,
                required,
                matched,
            } => {
                let noun = if *required == 1 {
                    "foreign key"
                } else {
                    "foreign keys"
                };
                write!(
                    f,
                    "must have exactly {required} {noun} referencing `{expected}`, found {matched}"
                )
            }
        }
    }
}
