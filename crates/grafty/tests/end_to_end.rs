mod support;

use grafty::{Orm, RelationKind, RelationSpec, TableSpec};
use pretty_assertions::assert_eq;

fn build_author_book() -> Orm {
    Orm::builder()
        .table(TableSpec::new("author", "author"))
        .table(
            TableSpec::new("book", "book").relation(
                RelationSpec::many_to_one("author", "author").back_reference("books"),
            ),
        )
        .build(&support::author_book())
        .unwrap()
}

#[test]
fn author_book_bidirectional() {
    let orm = build_author_book();

    let author = orm.get("author").unwrap();
    let book = orm.get("book").unwrap();

    assert_eq!(author.class_name, "Author");
    assert_eq!(author.table, "author");
    assert!(author.attribute("id").unwrap().is_column());
    assert!(author.attribute("name").unwrap().is_column());

    // `book.author`: many-to-one via author_id
    let to_author = book.relationship("author").unwrap();
    assert_eq!(to_author.kind, RelationKind::ManyToOne);
    assert_eq!(to_author.target, "author");
    assert_eq!(to_author.local_join_columns(), ["author_id"]);
    assert_eq!(to_author.remote_join_columns(), ["id"]);
    assert_eq!(to_author.pair.as_deref(), Some("books"));

    // implied `author.books`: one-to-many back over the same foreign key
    let to_books = author.relationship("books").unwrap();
    assert_eq!(to_books.kind, RelationKind::OneToMany);
    assert_eq!(to_books.target, "book");
    assert_eq!(to_books.local_join_columns(), ["id"]);
    assert_eq!(to_books.remote_join_columns(), ["author_id"]);
    assert_eq!(to_books.pair.as_deref(), Some("author"));

    // Both directions describe the same physical join.
    assert_eq!(to_books.join, to_author.join.reverse());
}

#[test]
fn attribute_names_are_unique() {
    let orm = build_author_book();

    for logical_name in orm.logical_names() {
        let class = orm.get(&logical_name).unwrap();

        let column_count = class.columns().count();
        let relationship_count = class.relationships().count();
        assert_eq!(class.attributes.len(), column_count + relationship_count);
    }

    // author: id, name, books
    assert_eq!(orm.get("author").unwrap().attributes.len(), 3);
    // book: id, title, author_id, author
    assert_eq!(orm.get("book").unwrap().attributes.len(), 4);
}

#[test]
fn building_twice_yields_identical_classes() {
    let first = build_author_book();
    let second = build_author_book();

    for logical_name in first.logical_names() {
        assert_eq!(
            *first.get(&logical_name).unwrap(),
            *second.get(&logical_name).unwrap()
        );
    }
}

#[test]
fn rebuild_same_config_is_idempotent() {
    let orm = build_author_book();
    let before = orm.get("author").unwrap();

    let config = grafty::Config::from_specs([
        TableSpec::new("author", "author"),
        TableSpec::new("book", "book").relation(
            RelationSpec::many_to_one("author", "author").back_reference("books"),
        ),
    ])
    .unwrap();
    orm.rebuild(&config, &support::author_book()).unwrap();

    let after = orm.get("author").unwrap();
    assert_eq!(*before, *after);
    assert_eq!(orm.logical_names(), ["author", "book"]);
}

/// Column attributes and relationship attributes share one namespace;
/// a relationship named after a reflected column cannot be attached.
#[test]
fn relationship_colliding_with_column_is_rejected() {
    let err = Orm::builder()
        .table(TableSpec::new("author", "author"))
        .table(
            TableSpec::new("book", "book")
                .relation(RelationSpec::many_to_one("author_id", "author")),
        )
        .build(&support::author_book())
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("`author_id`"));
}

#[test]
fn missing_class_lookup_fails_with_context() {
    let orm = build_author_book();

    assert!(orm.get("publisher").is_none());

    let err = orm.class("publisher").unwrap_err();
    assert!(err.to_string().contains("publisher"));
}

#[test]
fn missing_physical_table_aborts_build() {
    let err = Orm::builder()
        .table(TableSpec::new("author", "author"))
        .table(TableSpec::new("publisher", "publisher"))
        .build(&support::author_book())
        .unwrap_err();

    assert!(err.is_schema_not_found());
    assert!(err.to_string().contains("`publisher`"));
}
