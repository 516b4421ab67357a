mod adhoc;
mod ambiguous_relationship;
mod configuration;
mod malformed_association_table;
mod schema_not_found;
mod unresolvable_self_reference;

use adhoc::AdhocError;
use ambiguous_relationship::AmbiguousRelationshipError;
use configuration::ConfigurationError;
use malformed_association_table::MalformedAssociationTableError;
pub(crate) use malformed_association_table::MalformedAssociationTableKind;
use schema_not_found::SchemaNotFoundError;
use std::sync::Arc;
use unresolvable_self_reference::UnresolvableSelfReferenceError;
pub(crate) use unresolvable_self_reference::UnresolvableSelfReferenceKind;

/// Returns early with an error built from the format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc error from the format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building mappings.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause.
    #[inline(always)]
    pub fn context(self, consequent: Error) -> Error {
        self.context_impl(consequent)
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    fn root_kind(&self) -> &ErrorKind {
        self.chain().last().unwrap().kind()
    }

    /// True if the root cause is a configuration error (duplicate logical
    /// name, dangling target, attribute collision, ...).
    pub fn is_configuration(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::Configuration(_))
    }

    /// True if the root cause is a missing physical table.
    pub fn is_schema_not_found(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::SchemaNotFound(_))
    }

    /// True if the root cause is an under-specified relationship with more
    /// than one candidate foreign key.
    pub fn is_ambiguous_relationship(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::AmbiguousRelationship(_))
    }

    /// True if the root cause is a self-referential many-to-many that could
    /// not be disambiguated.
    pub fn is_unresolvable_self_reference(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::UnresolvableSelfReference(_))
    }

    /// True if the root cause is an association table with the wrong
    /// foreign-key shape.
    pub fn is_malformed_association_table(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::MalformedAssociationTable(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Configuration(ConfigurationError),
    SchemaNotFound(SchemaNotFoundError),
    AmbiguousRelationship(AmbiguousRelationshipError),
    UnresolvableSelfReference(UnresolvableSelfReferenceError),
    MalformedAssociationTable(MalformedAssociationTableError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            SchemaNotFound(err) => core::fmt::Display::fmt(err, f),
            AmbiguousRelationship(err) => core::fmt::Display::fmt(err, f),
            UnresolvableSelfReference(err) => core::fmt::Display::fmt(err, f),
            MalformedAssociationTable(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown grafty error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn anyhow_bridge() {
        // anyhow::Error converts to our Error
        let anyhow_err = anyhow::anyhow!("reflection backend failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "reflection backend failed");
    }

    #[test]
    fn duplicate_logical_name() {
        let err = Error::duplicate_logical_name("author");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: duplicate logical name `author`"
        );
    }

    #[test]
    fn dangling_target() {
        let err = Error::dangling_target("book", "author", "writer");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: relationship `book.author` targets unknown logical name `writer`"
        );
    }

    #[test]
    fn attribute_collision() {
        let err = Error::attribute_collision("author", "books");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: attribute `books` is declared more than once on `author`"
        );
    }

    #[test]
    fn schema_not_found() {
        let err = Error::schema_not_found("authors");
        assert!(err.is_schema_not_found());
        assert_eq!(
            err.to_string(),
            "table `authors` does not exist in the physical schema"
        );
    }

    #[test]
    fn ambiguous_relationship_lists_candidates() {
        let err = Error::ambiguous_relationship(
            "review",
            "author",
            vec!["reviewer_id -> users.id".into(), "subject_id -> users.id".into()],
        );
        assert!(err.is_ambiguous_relationship());
        assert_eq!(
            err.to_string(),
            "relationship `review.author` is ambiguous; candidate foreign keys: \
             `reviewer_id -> users.id`, `subject_id -> users.id`; \
             specify local_key/remote_key to disambiguate"
        );
    }

    #[test]
    fn schema_not_found_with_context() {
        let err = Error::schema_not_found("edges")
            .context(err!("resolving relationship `node.outgoing`"));
        assert!(err.is_schema_not_found());
        assert_eq!(
            err.to_string(),
            "resolving relationship `node.outgoing`: \
             table `edges` does not exist in the physical schema"
        );
    }
}
