//! Field cleanups applied during normalization.

/// Removes every literal two-backslash sequence (`\\`) from flavor text.
///
/// Pairs are removed left to right without overlap, so a lone trailing
/// backslash survives and cleaning already-clean text changes nothing.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace("\\\\", "")
}

/// Keyword display name to identifier: apostrophes dropped, spaces to `_`, upper case.
///
/// `"Quick Attack"` → `"QUICK_ATTACK"`, `"Can't Block"` → `"CANT_BLOCK"`.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.replace('\'', "").replace(' ', "_").to_uppercase()
}
