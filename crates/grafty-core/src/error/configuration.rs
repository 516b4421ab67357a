use super::{Error, ErrorKind};

/// Error when the declarative configuration is internally inconsistent.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    pub(super) kind: ConfigurationErrorKind,
}

#[derive(Debug)]
pub(crate) enum ConfigurationErrorKind {
    /// Two table specifications share a logical name.
    DuplicateLogicalName { logical: Box<str> },

    /// A relationship targets a logical name not present in the
    /// configuration.
    DanglingTarget {
        logical: Box<str>,
        attribute: Box<str>,
        target: Box<str>,
    },

    /// Two attributes (columns, relationships, or implied back-references)
    /// claim the same name on one class.
    AttributeCollision {
        logical: Box<str>,
        attribute: Box<str>,
    },

    /// A many-to-many relationship was declared without an association
    /// table.
    MissingAssociationTable {
        logical: Box<str>,
        attribute: Box<str>,
    },

    /// An association table was given for a relationship kind that does not
    /// use one.
    UnexpectedAssociationTable {
        logical: Box<str>,
        attribute: Box<str>,
    },

    /// No declared foreign key links the two tables of a relationship.
    NoForeignKey {
        logical: Box<str>,
        attribute: Box<str>,
        foreign_table: Box<str>,
        primary_table: Box<str>,
    },

    /// A key hint names a column that does not exist on the table it must
    /// refer to.
    UnknownColumn {
        logical: Box<str>,
        attribute: Box<str>,
        column: Box<str>,
        table: Box<str>,
    },

    /// A key hint exists but does not match the foreign-key side it is
    /// supposed to select.
    KeyHintMismatch {
        logical: Box<str>,
        attribute: Box<str>,
        column: Box<str>,
        table: Box<str>,
    },
}

impl Error {
    pub fn duplicate_logical_name(logical: impl Into<Box<str>>) -> Error {
        Error::configuration(ConfigurationErrorKind::DuplicateLogicalName {
            logical: logical.into(),
        })
    }

    pub fn dangling_target(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        target: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::DanglingTarget {
            logical: logical.into(),
            attribute: attribute.into(),
            target: target.into(),
        })
    }

    pub fn attribute_collision(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::AttributeCollision {
            logical: logical.into(),
            attribute: attribute.into(),
        })
    }

    pub fn missing_association_table(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::MissingAssociationTable {
            logical: logical.into(),
            attribute: attribute.into(),
        })
    }

    pub fn unexpected_association_table(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::UnexpectedAssociationTable {
            logical: logical.into(),
            attribute: attribute.into(),
        })
    }

    pub fn no_foreign_key(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        foreign_table: impl Into<Box<str>>,
        primary_table: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::NoForeignKey {
            logical: logical.into(),
            attribute: attribute.into(),
            foreign_table: foreign_table.into(),
            primary_table: primary_table.into(),
        })
    }

    pub fn unknown_column(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        column: impl Into<Box<str>>,
        table: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::UnknownColumn {
            logical: logical.into(),
            attribute: attribute.into(),
            column: column.into(),
            table: table.into(),
        })
    }

    pub fn key_hint_mismatch(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        column: impl Into<Box<str>>,
        table: impl Into<Box<str>>,
    ) -> Error {
        Error::configuration(ConfigurationErrorKind::KeyHintMismatch {
            logical: logical.into(),
            attribute: attribute.into(),
            column: column.into(),
            table: table.into(),
        })
    }

    fn configuration(kind: ConfigurationErrorKind) -> Error {
        Error::from(ErrorKind::Configuration(ConfigurationError { kind }))
    }
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ConfigurationErrorKind::*;

        f.write_str("invalid configuration: ")?;

        match &self.kind {
            DuplicateLogicalName { logical } => {
                write!(f, "duplicate logical name `{logical}`")
            }
            DanglingTarget {
                logical,
                attribute,
                target,
            } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` targets unknown logical name `{target}`"
                )
            }
            AttributeCollision { logical, attribute } => {
                write!(
                    f,
                    "attribute `{attribute}` is declared more than once on `{logical}`"
                )
            }
            MissingAssociationTable { logical, attribute } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` is many-to-many and requires an association_table"
                )
            }
            UnexpectedAssociationTable { logical, attribute } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` is not many-to-many and must not set association_table"
                )
            }
            NoForeignKey {
                logical,
                attribute,
                foreign_table,
                primary_table,
            } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` has no foreign key linking `{foreign_table}` to `{primary_table}`"
                )
            }
            UnknownColumn {
                logical,
                attribute,
                column,
                table,
            } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` names column `{column}` which does not exist on table `{table}`"
                )
            }
            KeyHintMismatch {
                logical,
                attribute,
                column,
                table,
            } => {
                write!(
                    f,
                    "relationship `{logical}.{attribute}` key hint `{column}` does not match a foreign-key column on `{table}`"
                )
            }
        }
    }
}
