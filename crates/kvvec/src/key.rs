/// Separates a vec prefix from the element index in store keys.
pub const SEPARATOR: &str = "::";

const LEN_SUFFIX: &str = "len";

/// Store key of the element at `index`: `prefix::index`, index in decimal.
///
/// The suffix after the last separator is all digits, so distinct
/// `(prefix, index)` pairs never map to the same key.
#[inline]
pub fn element_key(prefix: &str, index: usize) -> Vec<u8> {
    format!("{prefix}{SEPARATOR}{index}").into_bytes()
}

/// Store key holding the persisted length of an imported vec.
///
/// Never collides with [`element_key`] since its suffix isn't numeric.
#[inline]
pub fn len_key(prefix: &str) -> Vec<u8> {
    format!("{prefix}{SEPARATOR}{LEN_SUFFIX}").into_bytes()
}
