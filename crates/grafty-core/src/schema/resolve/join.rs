/// The fully qualified physical join backing a resolved relationship.
///
/// A join path is direction-aware: `source` is the class the relationship
/// is declared on, `target` the related class. [`JoinPath::reverse`]
/// produces the same physical join as seen from the other endpoint, which
/// is what back-reference attributes carry.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinPath {
    /// A direct join over one declared foreign key
    Direct(DirectJoin),

    /// A join through an association table
    Association(AssociationJoin),
}

/// One foreign key, recorded direction-absolutely: the table holding the
/// key columns and the table they reference. Which side is "local" is
/// decided by the relationship kind, not by this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectJoin {
    /// Table holding the foreign-key columns (the many side)
    pub foreign_table: String,

    pub foreign_columns: Vec<String>,

    /// The referenced table (the one side)
    pub primary_table: String,

    pub primary_columns: Vec<String>,
}

/// A two-hop join through an association table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationJoin {
    /// The association table
    pub table: String,

    /// Association-table columns referencing the source class's table
    pub source_columns: Vec<String>,

    /// The referenced columns on the source class's table
    pub source_targets: Vec<String>,

    /// Association-table columns referencing the target class's table
    pub target_columns: Vec<String>,

    /// The referenced columns on the target class's table
    pub target_targets: Vec<String>,
}

impl JoinPath {
    /// The same physical join, seen from the other endpoint.
    ///
    /// A direct join is self-inverse (the foreign key stays where it is);
    /// an association join swaps its two sides.
    pub fn reverse(&self) -> JoinPath {
        match self {
            JoinPath::Direct(join) => JoinPath::Direct(join.clone()),
            JoinPath::Association(join) => JoinPath::Association(AssociationJoin {
                table: join.table.clone(),
                source_columns: join.target_columns.clone(),
                source_targets: join.target_targets.clone(),
                target_columns: join.source_columns.clone(),
                target_targets: join.source_targets.clone(),
            }),
        }
    }
}
