//! Kiswahili household vocabulary.

use crate::dictionary::Dictionary;

/// Words to place.
pub const WORDS: [&str; 15] = [
    "MAMA", "BABA", "MTOTO", "SHULE", "KITI", "MEZA", "CHAKULA", "NYUMBA", "SAMAKI", "MBWA",
    "SOKO", "GARI", "NDIZI", "NGUO", "MWALIMU",
];

/// Accepted words: the placement words plus extra vocabulary crossings
/// may form.
pub const DICTIONARY: [&str; 32] = [
    "MAMA", "BABA", "MTOTO", "SHULE", "KITI", "MEZA", "CHAKULA", "NYUMBA", "SAMAKI", "MBWA",
    "SOKO", "GARI", "NDIZI", "NGUO", "MWALIMU", "KITU", "MKATE", "KUNDA", "MSICHANA", "MVULA",
    "MBWA", "NGOMA", "SOMA", "KAZI", "PENDE", "NDOTO", "MAJI", "MOTO", "MKONO", "SIMBA", "PEPE",
    "KUNDA",
];

/// The dictionary as a `Dictionary`.
#[must_use]
pub fn dictionary() -> Dictionary {
    DICTIONARY.into_iter().collect()
}
