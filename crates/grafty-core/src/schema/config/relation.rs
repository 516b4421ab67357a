/// The cardinality and shape of a declared relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    OneToMany,
    ManyToOne,
    ManyToMany,
    SelfReferentialManyToMany,
}

impl RelationKind {
    /// The kind of the implied inverse attribute: one-to-many and
    /// many-to-one swap, the many-to-many variants are their own inverse.
    pub fn invert(self) -> RelationKind {
        match self {
            RelationKind::OneToMany => RelationKind::ManyToOne,
            RelationKind::ManyToOne => RelationKind::OneToMany,
            RelationKind::ManyToMany => RelationKind::ManyToMany,
            RelationKind::SelfReferentialManyToMany => RelationKind::SelfReferentialManyToMany,
        }
    }

    /// True for both many-to-many variants.
    pub fn is_many_to_many(self) -> bool {
        matches!(
            self,
            RelationKind::ManyToMany | RelationKind::SelfReferentialManyToMany
        )
    }

    pub fn is_self_referential(self) -> bool {
        matches!(self, RelationKind::SelfReferentialManyToMany)
    }
}

/// A declared relationship attribute on a [`TableSpec`].
///
/// `local_key`/`remote_key` are optional disambiguation hints. For direct
/// relationships they name columns on the declaring and target tables; for
/// a self-referential many-to-many they name the two foreign-key columns
/// on the association table (subject side and object side) and are
/// mandatory, since that join shape cannot be resolved by introspection
/// alone.
///
/// [`TableSpec`]: super::TableSpec
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationSpec {
    /// Name of the attribute on the mapped class
    pub attribute: String,

    pub kind: RelationKind,

    /// Logical name of the related spec. Forward references are allowed.
    pub target: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub local_key: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub remote_key: Option<String>,

    /// Required exactly when `kind` is a many-to-many variant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub association_table: Option<String>,

    /// When set, the build also adds the inverse attribute with this name
    /// to the target class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub back_reference: Option<String>,
}

impl RelationSpec {
    fn new(attribute: impl Into<String>, kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            kind,
            target: target.into(),
            local_key: None,
            remote_key: None,
            association_table: None,
            back_reference: None,
        }
    }

    pub fn one_to_many(attribute: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(attribute, RelationKind::OneToMany, target)
    }

    pub fn many_to_one(attribute: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(attribute, RelationKind::ManyToOne, target)
    }

    pub fn many_to_many(
        attribute: impl Into<String>,
        target: impl Into<String>,
        association_table: impl Into<String>,
    ) -> Self {
        Self::new(attribute, RelationKind::ManyToMany, target)
            .association_table(association_table)
    }

    pub fn self_referential(
        attribute: impl Into<String>,
        target: impl Into<String>,
        association_table: impl Into<String>,
    ) -> Self {
        Self::new(attribute, RelationKind::SelfReferentialManyToMany, target)
            .association_table(association_table)
    }

    pub fn kind(mut self, kind: RelationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn local_key(mut self, column: impl Into<String>) -> Self {
        self.local_key = Some(column.into());
        self
    }

    pub fn remote_key(mut self, column: impl Into<String>) -> Self {
        self.remote_key = Some(column.into());
        self
    }

    pub fn association_table(mut self, table: impl Into<String>) -> Self {
        self.association_table = Some(table.into());
        self
    }

    pub fn back_reference(mut self, attribute: impl Into<String>) -> Self {
        self.back_reference = Some(attribute.into());
        self
    }
}
