//! Internal parse errors.
//!
//! Every grammar production in [`crate::parser`] returns
//! `Result<_, ParseError>` and propagates with `?`. None of this surfaces to
//! callers of the top-level API: [`crate::demangle_symbol_as_node`] is the
//! one place that catches `Err` and replaces the in-progress root with a
//! `Failure` node, per the "first failure poisons the parse" policy.

/// Why a grammar production failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is not a known mangling")]
    UnrecognizedMagic,
    #[error("unexpected end of input")]
    Truncated,
    #[error("malformed scalar")]
    MalformedScalar,
    #[error("substitution index {0} out of range")]
    SubstitutionOutOfRange(u32),
    #[error("archetype depth {0} out of range")]
    ArchetypeOutOfRange(u32),
    #[error("invalid punycode")]
    BadPunycode,
    #[error("invalid operator alphabet entry")]
    BadOperatorAlphabet,
    #[error("unknown type or production tag")]
    UnknownTag,
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type ParseResult<T> = Result<T, ParseError>;
