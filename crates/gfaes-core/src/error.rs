//! Error type shared by the decoding helpers and table construction.

/// Errors reported by `gfaes-core`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input decoded to the wrong number of bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input was rejected (`plaintext`, `key`, ...).
        field: &'static str,
        /// Required byte count.
        expected: usize,
        /// Byte count found.
        actual: usize,
    },
    /// Hex input with an odd number of digits.
    #[error("{field} has an odd number of hex digits ({digits})")]
    OddHexLength {
        /// Which input was rejected.
        field: &'static str,
        /// Number of digits found.
        digits: usize,
    },
    /// Hex input containing a non-hex character.
    #[error("{field} contains invalid hex character {character:?} at position {index}")]
    InvalidEncoding {
        /// Which input was rejected.
        field: &'static str,
        /// Zero-based character position.
        index: usize,
        /// Offending character.
        character: char,
    },
    /// The generator walk did not reach every nonzero field element.
    #[error(
        "generator {generator:#04x} with cogenerator {cogenerator:#04x} covers {covered} of 255 nonzero elements"
    )]
    IncompleteInverseTable {
        /// Multiplicative generator used for the walk.
        generator: u8,
        /// Claimed inverse of the generator.
        cogenerator: u8,
        /// Number of nonzero elements that received an inverse.
        covered: usize,
    },
}

/// Result alias for `gfaes-core`.
pub type Result<T> = std::result::Result<T, Error>;
