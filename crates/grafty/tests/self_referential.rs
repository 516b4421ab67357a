mod support;

use grafty::{Orm, RelationKind, RelationSpec, TableSpec};
use pretty_assertions::assert_eq;

fn outgoing() -> RelationSpec {
    RelationSpec::self_referential("outgoing", "node", "edge")
        .local_key("subject_id")
        .remote_key("object_id")
        .back_reference("incoming")
}

/// The reason this crate exists: `edge(subject_id -> node.id,
/// object_id -> node.id)` cannot be resolved by introspection alone. With
/// explicit hints, the two directions must come out distinct, not
/// swapped or merged.
#[test]
fn subject_and_object_sides_stay_distinct() {
    let orm = Orm::builder()
        .table(TableSpec::new("node", "node").relation(outgoing()))
        .build(&support::node_edge())
        .unwrap();

    let node = orm.get("node").unwrap();

    let out = node.relationship("outgoing").unwrap();
    assert_eq!(out.kind, RelationKind::SelfReferentialManyToMany);
    assert_eq!(out.target, "node");
    assert_eq!(out.local_join_columns(), ["subject_id"]);
    assert_eq!(out.remote_join_columns(), ["object_id"]);

    let incoming = node.relationship("incoming").unwrap();
    assert_eq!(incoming.kind, RelationKind::SelfReferentialManyToMany);
    assert_eq!(incoming.local_join_columns(), ["object_id"]);
    assert_eq!(incoming.remote_join_columns(), ["subject_id"]);

    assert_ne!(out.join, incoming.join);
    assert_eq!(incoming.join, out.join.reverse());
    assert_eq!(out.pair.as_deref(), Some("incoming"));
    assert_eq!(incoming.pair.as_deref(), Some("outgoing"));
}

#[test]
fn missing_hints_are_never_guessed() {
    let err = Orm::builder()
        .table(TableSpec::new("node", "node").relation(
            RelationSpec::self_referential("outgoing", "node", "edge"),
        ))
        .build(&support::node_edge())
        .unwrap_err();

    assert!(err.is_unresolvable_self_reference());
    assert!(err.to_string().contains("local_key and remote_key"));
}

#[test]
fn colliding_hints_are_rejected() {
    let err = Orm::builder()
        .table(
            TableSpec::new("node", "node").relation(
                RelationSpec::self_referential("outgoing", "node", "edge")
                    .local_key("subject_id")
                    .remote_key("subject_id"),
            ),
        )
        .build(&support::node_edge())
        .unwrap_err();

    assert!(err.is_unresolvable_self_reference());
}

#[test]
fn hint_must_match_a_foreign_key_column() {
    let err = Orm::builder()
        .table(
            TableSpec::new("node", "node").relation(
                RelationSpec::self_referential("outgoing", "node", "edge")
                    .local_key("parent_id")
                    .remote_key("object_id"),
            ),
        )
        .build(&support::node_edge())
        .unwrap_err();

    assert!(err.is_unresolvable_self_reference());
    assert!(err.to_string().contains("`parent_id`"));
}

/// Declaring the same shape as a plain many_to_many is caught and pointed
/// at the self-referential kind.
#[test]
fn plain_many_to_many_over_a_self_join_is_rejected() {
    let err = Orm::builder()
        .table(
            TableSpec::new("node", "node")
                .relation(RelationSpec::many_to_many("neighbors", "node", "edge")),
        )
        .build(&support::node_edge())
        .unwrap_err();

    assert!(err.is_unresolvable_self_reference());
    assert!(err.to_string().contains("self_referential_many_to_many"));
}

/// A self-referential declaration whose target is bound to a different
/// physical table cannot be satisfied by the association table.
#[test]
fn self_reference_must_target_its_own_table() {
    let reflector = support::node_edge();

    let err = Orm::builder()
        .table(TableSpec::new("node", "node"))
        .table(
            TableSpec::new("edge_list", "edge").relation(
                RelationSpec::self_referential("peers", "node", "edge")
                    .local_key("subject_id")
                    .remote_key("object_id"),
            ),
        )
        .build(&reflector)
        .unwrap_err();

    assert!(err.is_unresolvable_self_reference());
}
