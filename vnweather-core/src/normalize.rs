//! City name normalization.
//!
//! Users type city names the way they know them: "Hà Nội", "ha noi", "Sài Gòn",
//! "tp hcm". OpenWeather only recognizes a handful of English spellings for
//! Vietnamese cities, so queries are resolved through a small alias table
//! before they hit the network. Anything not in the table is passed through
//! untouched.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// Lowercased query -> name accepted by the OpenWeather `q` parameter.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("hà nội", "Hanoi"),
    ("ha noi", "Hanoi"),
    ("hanoi", "Hanoi"),
    ("hồ chí minh", "Ho Chi Minh City"),
    ("ho chi minh", "Ho Chi Minh City"),
    ("tp hcm", "Ho Chi Minh City"),
    ("sài gòn", "Ho Chi Minh City"),
    ("saigon", "Ho Chi Minh City"),
    ("đà nẵng", "Da Nang"),
    ("da nang", "Da Nang"),
    ("hải phòng", "Haiphong"),
    ("hai phong", "Haiphong"),
    ("cần thơ", "Can Tho"),
    ("can tho", "Can Tho"),
    ("nha trang", "Nha Trang"),
    ("huế", "Hue"),
    ("hue", "Hue"),
    ("vũng tàu", "Vung Tau"),
    ("vung tau", "Vung Tau"),
    ("đà lạt", "Da Lat"),
    ("da lat", "Da Lat"),
    ("biên hòa", "Bien Hoa"),
    ("bien hoa", "Bien Hoa"),
    ("quy nhơn", "Quy Nhon"),
    ("quy nhon", "Quy Nhon"),
];

/// Exact lookup in [`CITY_ALIASES`]. The key must already be lowercased.
pub fn lookup_alias(key: &str) -> Option<&'static str> {
    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Remove Vietnamese tone and vowel marks, keeping the base letters.
///
/// `đ`/`Đ` have no canonical decomposition and are mapped by hand.
pub fn strip_diacritics(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

// Combining Diacritical Marks block, which covers every mark Vietnamese uses
// (tones plus breve, circumflex and horn).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Resolve a free-text city query to the name the weather API expects.
///
/// Tries the alias table on the trimmed, lowercased query, then again with
/// diacritics stripped. When neither matches, the input is returned exactly as
/// given (no trimming, original case).
pub fn normalize_city_name(city: &str) -> Cow<'_, str> {
    // Compose first so input typed with combining marks matches the table keys.
    let lower: String = city.trim().to_lowercase().nfc().collect();

    if let Some(canonical) = lookup_alias(&lower) {
        return Cow::Borrowed(canonical);
    }

    let stripped = strip_diacritics(&lower);
    if let Some(canonical) = lookup_alias(&stripped) {
        return Cow::Borrowed(canonical);
    }

    Cow::Borrowed(city)
}
