#![allow(dead_code)]

use grafty::db::{ForeignKey, Table, Type};
use grafty::StaticReflector;

/// `book.author_id -> author.id`.
pub fn author_book() -> StaticReflector {
    StaticReflector::new()
        .table(
            Table::new("author")
                .column("id", Type::Integer(8))
                .column("name", Type::Text)
                .primary_key(["id"]),
        )
        .table(
            Table::new("book")
                .column("id", Type::Integer(8))
                .column("title", Type::Text)
                .column("author_id", Type::Integer(8))
                .primary_key(["id"])
                .foreign_key(ForeignKey::new("author_id", "author", "id")),
        )
}

/// A directed graph: `edge(subject_id -> node.id, object_id -> node.id)`.
pub fn node_edge() -> StaticReflector {
    StaticReflector::new()
        .table(
            Table::new("node")
                .column("id", Type::Integer(8))
                .column("name", Type::Text)
                .primary_key(["id"]),
        )
        .table(
            Table::new("edge")
                .column("id", Type::Integer(8))
                .column("subject_id", Type::Integer(8))
                .column("object_id", Type::Integer(8))
                .primary_key(["id"])
                .foreign_key(ForeignKey::new("subject_id", "node", "id"))
                .foreign_key(ForeignKey::new("object_id", "node", "id")),
        )
}

/// Plain many-to-many: `book_tags(book_id -> book.id, tag_id -> tag.id)`.
pub fn book_tag() -> StaticReflector {
    StaticReflector::new()
        .table(
            Table::new("book")
                .column("id", Type::Integer(8))
                .column("title", Type::Text)
                .primary_key(["id"]),
        )
        .table(
            Table::new("tag")
                .column("id", Type::Integer(8))
                .column("label", Type::VarChar(64))
                .primary_key(["id"]),
        )
        .table(
            Table::new("book_tags")
                .column("book_id", Type::Integer(8))
                .column("tag_id", Type::Integer(8))
                .primary_key(["book_id", "tag_id"])
                .foreign_key(ForeignKey::new("book_id", "book", "id"))
                .foreign_key(ForeignKey::new("tag_id", "tag", "id")),
        )
}

/// Two foreign keys between the same table pair:
/// `review.reviewer_id -> users.id` and `review.subject_id -> users.id`.
pub fn review_users() -> StaticReflector {
    StaticReflector::new()
        .table(
            Table::new("users")
                .column("id", Type::Integer(8))
                .column("name", Type::Text)
                .primary_key(["id"]),
        )
        .table(
            Table::new("review")
                .column("id", Type::Integer(8))
                .nullable_column("body", Type::Text)
                .column("reviewer_id", Type::Integer(8))
                .column("subject_id", Type::Integer(8))
                .primary_key(["id"])
                .foreign_key(ForeignKey::new("reviewer_id", "users", "id"))
                .foreign_key(ForeignKey::new("subject_id", "users", "id")),
        )
}
