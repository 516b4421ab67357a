use super::{Error, ErrorKind};

/// Error when a self-referential many-to-many relationship cannot be
/// disambiguated.
///
/// The physical schema alone cannot tell which foreign key on the
/// association table plays the subject role and which plays the object
/// role, so the configuration must say. This error reports a missing or
/// unusable hint.
#[derive(Debug)]
pub(super) struct UnresolvableSelfReferenceError {
    logical: Box<str>,
    attribute: Box<str>,
    pub(super) kind: UnresolvableSelfReferenceKind,
}

#[derive(Debug)]
pub(crate) enum UnresolvableSelfReferenceKind {
    /// local_key and/or remote_key were not supplied.
    MissingHints,

    /// The two hints select the same foreign key.
    CollidingHints { column: Box<str> },

    /// A hint does not match exactly one foreign-key column on the
    /// association table.
    UnmatchedHint { column: Box<str>, table: Box<str> },

    /// Both foreign keys must reference the table the relationship is
    /// declared on.
    TargetNotSelf {
        source_table: Box<str>,
        target_table: Box<str>,
    },

    /// A plain many-to-many was declared over an association table whose
    /// foreign keys both reference the declaring table.
    DeclaredManyToMany { table: Box<str> },
}

impl Error {
    pub(crate) fn unresolvable_self_reference(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        kind: UnresolvableSelfReferenceKind,
    ) -> Error {
        Error::from(ErrorKind::UnresolvableSelfReference(
            UnresolvableSelfReferenceError {
                logical: logical.into(),
                attribute: attribute.into(),
                kind,
            },
        ))
    }
}

impl std::error::Error for UnresolvableSelfReferenceError {}

impl core::fmt::Display for UnresolvableSelfReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use UnresolvableSelfReferenceKind::*;

        write!(
            f,
            "self-referential relationship `{}.{}` cannot be resolved: ",
            self.logical, self.attribute
        )?;

        match &self.kind {
            MissingHints => f.write_str(
                "local_key and remote_key must name the two foreign-key columns on the association table",
            ),
            CollidingHints { column } => {
                write!(
                    f,
                    "local_key and remote_key must select two different foreign keys; both resolve to `{column}`"
                )
            }
            UnmatchedHint { column, table } => {
                write!(
                    f,
                    "`{column}` does not match exactly one foreign-key column on association table `{table}`"
                )
            }
            TargetNotSelf {
                source_table,
                target_table,
            } => {
                write!(
                    f,
                    "declared on table `{source_table}` but the association table references `{target_table}`"
                )
            }
            DeclaredManyToMany { table } => {
                write!(
                    f,
                    "foreign keys on `{table}` both reference the declaring table; \
                     declare the relationship self_referential_many_to_many with key hints"
                )
            }
        }
    }
}
