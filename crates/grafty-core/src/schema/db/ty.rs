/// Database storage types as reported by reflection.
///
/// These are the external column types of the deployed schema, not an
/// application-level type system. The mapping builder copies them onto
/// column attributes verbatim; no conversion happens in this crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Floating point
    Real,

    /// Raw bytes
    Blob,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Date and time
    Timestamp,
}
