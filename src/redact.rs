//! Replacement-string synthesis.

/// Build the mask for `word`: `unit` repeated once per character.
///
/// A one-character word gets `unit` unchanged. Ignorable characters inside
/// the span count too, so `b-a-d` becomes five units.
pub fn mask_for(unit: &str, word: &str) -> String {
    unit.repeat(word.chars().count().max(1))
}
