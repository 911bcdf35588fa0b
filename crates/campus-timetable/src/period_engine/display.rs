//! Deterministic display values: per-course colors and building names.

use regex::Regex;
use std::sync::LazyLock;

/// Pastel colors used for course blocks
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#FFD6D6", "#FFE5C2", "#FFF4BD", "#E2F5C8", "#C9F0DD", "#C6EEF2", "#CFE3FF", "#D9D4FF",
    "#EBD5FF", "#FFD4EC", "#E8E1D5", "#D5E4E8",
];

/// Campus names that trail location strings
pub const DEFAULT_CAMPUS_SUFFIXES: [&str; 6] = [
    "서울캠퍼스",
    "글로벌캠퍼스",
    "국제캠퍼스",
    "자연캠퍼스",
    "인문캠퍼스",
    "본캠퍼스",
];

static ROOM_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9-]+호?$").unwrap());
static CODE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]?[0-9]+$").unwrap());
static TRAILING_ROOM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9-]*호?$").unwrap());

/// Palette index for a course id.
///
/// Combines a wrapping `h * 31 + c` rolling hash with the plain sum of
/// character codes. Always returns 0 for an empty palette.
pub fn color_index(course_id: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let (rolling, sum) = course_id.chars().fold((0u32, 0u32), |(rolling, sum), ch| {
        let c = ch as u32;
        (rolling.wrapping_mul(31).wrapping_add(c), sum.wrapping_add(c))
    });
    (rolling.wrapping_add(sum) % palette_len as u32) as usize
}

/// Color for a course id from the default palette.
pub fn color_of(course_id: &str) -> &'static str {
    DEFAULT_PALETTE[color_index(course_id, DEFAULT_PALETTE.len())]
}

/// Color for a course id from a custom palette, falling back to the default
/// palette when `palette` is empty.
pub fn color_in<'a>(course_id: &str, palette: &'a [String]) -> &'a str {
    palette
        .get(color_index(course_id, palette.len()))
        .map(String::as_str)
        .unwrap_or_else(|| color_of(course_id))
}

fn strip_campus_suffixes<'a, S: AsRef<str>>(mut text: &'a str, suffixes: &[S]) -> &'a str {
    loop {
        text = text.trim_end();
        match suffixes
            .iter()
            .find_map(|s| text.strip_suffix(s.as_ref()).filter(|_| !s.as_ref().is_empty()))
        {
            Some(rest) => text = rest,
            None => return text,
        }
    }
}

fn is_room_number(token: &str) -> bool {
    ROOM_TOKEN_REGEX.is_match(token) || CODE_TOKEN_REGEX.is_match(token)
}

/// Extracts the building name from a free-text location using the default campus names.
///
/// `"공학관 301호 (서울캠퍼스)"` becomes `"공학관"`. Returns an empty string
/// when nothing resembling a building is left; callers should treat that as
/// unknown.
pub fn building_name(location: &str) -> String {
    building_name_with(location, &DEFAULT_CAMPUS_SUFFIXES)
}

/// Same as [`building_name`] with a caller-supplied list of campus names.
pub fn building_name_with<S: AsRef<str>>(location: &str, campus_suffixes: &[S]) -> String {
    let text = strip_campus_suffixes(location, campus_suffixes);
    let text = match text.find(['(', '（']) {
        Some(idx) => &text[..idx],
        None => text,
    };

    text.split_whitespace()
        .rev()
        .filter(|token| !campus_suffixes.iter().any(|s| s.as_ref() == *token))
        .find(|token| !is_room_number(token))
        .map(|token| TRAILING_ROOM_REGEX.replace(token, "").trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stable() {
        let first = color_of("123");
        for _ in 0..100 {
            assert_eq!(color_of("123"), first);
        }
        assert!(DEFAULT_PALETTE.contains(&first));
    }

    #[test]
    fn test_color_index_known_value() {
        // "12": rolling = 49 * 31 + 50 = 1569, sum = 99
        assert_eq!(color_index("12", 12), (1569 + 99) % 12);
        assert_eq!(color_index("", 12), 0);
        assert_eq!(color_index("anything", 0), 0);
    }

    #[test]
    fn test_colors_spread_over_palette() {
        let used: std::collections::HashSet<&str> =
            (0..200).map(|i| color_of(&i.to_string())).collect();
        assert!(used.len() > DEFAULT_PALETTE.len() / 2);
    }

    #[test]
    fn test_custom_palette() {
        let palette = vec!["#000000".to_string()];
        assert_eq!(color_in("42", &palette), "#000000");
        assert_eq!(color_in("42", &[]), color_of("42"));
    }

    #[test]
    fn test_building_name_basic() {
        assert_eq!(building_name("공학관 301호"), "공학관");
        assert_eq!(building_name("공학관301호"), "공학관");
        assert_eq!(building_name("인문관 B101"), "인문관");
        assert_eq!(building_name("과학관 2-101"), "과학관");
    }

    #[test]
    fn test_building_name_strips_campus_and_notes() {
        assert_eq!(building_name("공학관 301호 (서울캠퍼스)"), "공학관");
        assert_eq!(building_name("정보관 1201호 서울캠퍼스"), "정보관");
        assert_eq!(building_name("서울캠퍼스 정보관 1201"), "정보관");
        assert_eq!(building_name("미래관 410（실습실）"), "미래관");
    }

    #[test]
    fn test_building_name_keeps_inner_digits() {
        assert_eq!(building_name("제2공학관 101호"), "제2공학관");
    }

    #[test]
    fn test_building_name_unknown() {
        assert_eq!(building_name(""), "");
        assert_eq!(building_name("301호"), "");
        assert_eq!(building_name("(온라인)"), "");
        assert_eq!(building_name("글로벌캠퍼스"), "");
    }

    #[test]
    fn test_building_name_custom_suffixes() {
        assert_eq!(building_name_with("Hall 12 Main", &["Main"]), "Hall");
    }
}
