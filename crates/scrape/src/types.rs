// ABOUTME: Type expression normalization for the Bot API documentation tables.
// ABOUTME: Splits compound expressions ("A or B", "A, B") and maps textual aliases to canonical names.

/// Primitive type names that never appear as documented types.
pub const PRIMITIVE_TYPES: [&str; 4] = ["String", "Boolean", "Integer", "Float"];

/// Prefix the documentation uses for list types, possibly repeated.
pub const ARRAY_PREFIX: &str = "Array of ";

/// Splits a raw type expression into canonical type names.
///
/// Pieces are split on `" or "`, then `" and "`, then `", "`, trimmed, and
/// passed through [`canonical_type`]. Order follows the input; duplicates
/// are kept.
pub fn normalize_type(expr: &str) -> Vec<String> {
    expr.split(" or ")
        .map(str::trim)
        .flat_map(|piece| piece.split(" and "))
        .map(str::trim)
        .flat_map(|piece| piece.split(", "))
        .map(|piece| canonical_type(piece.trim()).to_string())
        .collect()
}

/// Maps a single type name through the alias table.
pub fn canonical_type(name: &str) -> &str {
    match name {
        // sendMediaGroup documents its result as "Messages".
        "Messages" => "Message",
        "Float number" => "Float",
        "Int" => "Integer",
        "True" | "Bool" => "Boolean",
        other => other,
    }
}

/// Removes every leading "Array of " prefix.
pub fn strip_array(name: &str) -> &str {
    let mut inner = name;
    while let Some(rest) = inner.strip_prefix(ARRAY_PREFIX) {
        inner = rest;
    }
    inner
}

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}
