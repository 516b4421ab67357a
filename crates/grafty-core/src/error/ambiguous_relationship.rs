use super::{Error, ErrorKind};

/// Error when more than one foreign key satisfies an under-specified
/// relationship.
///
/// Candidates are listed in sorted order so the message does not depend on
/// the iteration order of the reflected foreign-key set.
#[derive(Debug)]
pub(super) struct AmbiguousRelationshipError {
    logical: Box<str>,
    attribute: Box<str>,
    candidates: Vec<String>,
}

impl Error {
    pub fn ambiguous_relationship(
        logical: impl Into<Box<str>>,
        attribute: impl Into<Box<str>>,
        mut candidates: Vec<String>,
    ) -> Error {
        candidates.sort();
        Error::from(ErrorKind::AmbiguousRelationship(
            AmbiguousRelationshipError {
                logical: logical.into(),
                attribute: attribute.into(),
                candidates,
            },
        ))
    }
}

impl std::error::Error for AmbiguousRelationshipError {}

impl core::fmt::Display for AmbiguousRelationshipError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relationship `{}.{}` is ambiguous; candidate foreign keys: ",
            self.logical, self.attribute
        )?;
        let mut it = self.candidates.iter().peekable();
        while let Some(candidate) = it.next() {
            write!(f, "`{candidate}`")?;
            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }
        f.write_str("; specify local_key/remote_key to disambiguate")
    }
}
