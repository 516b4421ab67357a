use crate::schema::config::RelationKind;
use crate::schema::db;
use crate::schema::resolve::JoinPath;

/// An attribute of a [`MappedClass`]: either a reflected column or a
/// resolved relationship.
///
/// [`MappedClass`]: super::MappedClass
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Column(ColumnAttribute),
    Relationship(RelationshipAttribute),
}

/// Attribute backed by a single reflected column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAttribute {
    /// The backing column name
    pub column: String,

    /// Storage type, copied from reflection
    pub ty: db::Type,

    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,
}

/// Attribute backed by a resolved relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipAttribute {
    pub kind: RelationKind,

    /// Logical name of the related class
    pub target: String,

    /// The fully qualified join, as seen from the owning class
    pub join: JoinPath,

    /// Name of the inverse attribute on the target class, when the
    /// relationship is bidirectional
    pub pair: Option<String>,
}

impl Attribute {
    pub fn is_column(&self) -> bool {
        matches!(self, Attribute::Column(_))
    }

    pub fn is_relationship(&self) -> bool {
        matches!(self, Attribute::Relationship(_))
    }

    pub fn as_column(&self) -> Option<&ColumnAttribute> {
        match self {
            Attribute::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn as_relationship(&self) -> Option<&RelationshipAttribute> {
        match self {
            Attribute::Relationship(relationship) => Some(relationship),
            _ => None,
        }
    }

    pub fn expect_column(&self) -> &ColumnAttribute {
        self.as_column().expect("attribute is not a column")
    }

    pub fn expect_relationship(&self) -> &RelationshipAttribute {
        self.as_relationship()
            .expect("attribute is not a relationship")
    }
}

impl From<ColumnAttribute> for Attribute {
    fn from(value: ColumnAttribute) -> Self {
        Self::Column(value)
    }
}

impl From<RelationshipAttribute> for Attribute {
    fn from(value: RelationshipAttribute) -> Self {
        Self::Relationship(value)
    }
}

impl RelationshipAttribute {
    /// The join columns on the owning class's side.
    ///
    /// For a many-to-one these are the foreign-key columns on the owning
    /// table; for a one-to-many, the referenced (usually primary-key)
    /// columns. For many-to-many variants they are the association-table
    /// columns adjacent to the owning class.
    pub fn local_join_columns(&self) -> &[String] {
        match (&self.join, self.kind) {
            (JoinPath::Direct(join), RelationKind::ManyToOne) => &join.foreign_columns,
            (JoinPath::Direct(join), RelationKind::OneToMany) => &join.primary_columns,
            (JoinPath::Association(join), _) => &join.source_columns,
            (JoinPath::Direct(_), _) => panic!("direct join on a many-to-many relationship"),
        }
    }

    /// The join columns on the target class's side.
    pub fn remote_join_columns(&self) -> &[String] {
        match (&self.join, self.kind) {
            (JoinPath::Direct(join), RelationKind::ManyToOne) => &join.primary_columns,
            (JoinPath::Direct(join), RelationKind::OneToMany) => &join.foreign_columns,
            (JoinPath::Association(join), _) => &join.target_columns,
            (JoinPath::Direct(_), _) => panic!("direct join on a many-to-many relationship"),
        }
    }
}
