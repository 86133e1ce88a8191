//! Compile-time lookup tables.
//!
//! Kept as plain arrays rather than match chains: node-kind names live in
//! `unmangle_core::kind`, the other three (value-witness mnemonics,
//! operator alphabet, substitution single-letter map) live here.

/// The 20 named value-witness operations, keyed by their two-letter code.
/// Order matches the original enum declaration; `toString` there is the
/// source of every mnemonic.
pub const VALUE_WITNESS_TABLE: &[(&[u8; 2], &str)] = &[
    (b"al", "allocateBuffer"),
    (b"ca", "assignWithCopy"),
    (b"ta", "assignWithTake"),
    (b"de", "deallocateBuffer"),
    (b"xx", "destroy"),
    (b"XX", "destroyBuffer"),
    (b"CP", "initializeBufferWithCopyOfBuffer"),
    (b"Cp", "initializeBufferWithCopy"),
    (b"cp", "initializeWithCopy"),
    (b"Cc", "initializeArrayWithCopy"),
    (b"Tk", "initializeBufferWithTake"),
    (b"tk", "initializeWithTake"),
    (b"Tt", "initializeArrayWithTakeFrontToBack"),
    (b"tT", "initializeArrayWithTakeBackToFront"),
    (b"pr", "projectBuffer"),
    (b"ty", "typeof"),
    (b"Xx", "destroyArray"),
    (b"xs", "storeExtraInhabitant"),
    (b"xg", "getExtraInhabitantIndex"),
    (b"ug", "getEnumTag"),
    (b"up", "inplaceProjectEnumData"),
];

/// Looks up the canonical camelCase name for a two-byte value-witness code.
pub fn value_witness_name(code: [u8; 2]) -> Option<&'static str> {
    VALUE_WITNESS_TABLE
        .iter()
        .find(|(c, _)| **c == code)
        .map(|(_, name)| *name)
}

/// Operator-identifier alphabet, indexed by `c - b'a'`. A `None` slot is an
/// invalid remapping (the original's single space character in
/// `"& @/= >    <*!|+ %-~   ^ ."`).
pub const OPERATOR_ALPHABET: [Option<u8>; 26] = {
    const RAW: &[u8; 26] = b"& @/= >    <*!|+ %-~   ^ .";
    let mut table = [None; 26];
    let mut i = 0;
    while i < 26 {
        if RAW[i] != b' ' {
            table[i] = Some(RAW[i]);
        }
        i += 1;
    }
    table
};

pub fn remap_operator_byte(c: u8) -> Option<u8> {
    if c.is_ascii_lowercase() {
        OPERATOR_ALPHABET[(c - b'a') as usize]
    } else {
        None
    }
}

/// One-letter substitution codes mapping directly to well-known modules and
/// stdlib types. `(module, name)` pairs for nominal types;
/// bare module codes carry `name = None`.
pub struct BuiltinSubstitution {
    pub letter: u8,
    pub module: &'static str,
    pub name: Option<&'static str>,
    pub kind: unmangle_core::NodeKind,
}

pub const BUILTIN_SUBSTITUTIONS: &[BuiltinSubstitution] = &[
    BuiltinSubstitution { letter: b'o', module: "ObjectiveC", name: None, kind: unmangle_core::NodeKind::Module },
    BuiltinSubstitution { letter: b'C', module: "C", name: None, kind: unmangle_core::NodeKind::Module },
    BuiltinSubstitution { letter: b's', module: "Swift", name: None, kind: unmangle_core::NodeKind::Module },
    BuiltinSubstitution { letter: b'a', module: "Swift", name: Some("Array"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'b', module: "Swift", name: Some("Bool"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'c', module: "Swift", name: Some("UnicodeScalar"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'd', module: "Swift", name: Some("Double"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'f', module: "Swift", name: Some("Float"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'i', module: "Swift", name: Some("Int"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'q', module: "Swift", name: Some("Optional"), kind: unmangle_core::NodeKind::Enum },
    BuiltinSubstitution { letter: b'Q', module: "Swift", name: Some("ImplicitlyUnwrappedOptional"), kind: unmangle_core::NodeKind::Enum },
    BuiltinSubstitution { letter: b'S', module: "Swift", name: Some("String"), kind: unmangle_core::NodeKind::Structure },
    BuiltinSubstitution { letter: b'u', module: "Swift", name: Some("UInt"), kind: unmangle_core::NodeKind::Structure },
];

pub fn builtin_substitution(letter: u8) -> Option<&'static BuiltinSubstitution> {
    BUILTIN_SUBSTITUTIONS.iter().find(|s| s.letter == letter)
}
