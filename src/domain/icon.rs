//! Closed symbolic icon namespace.
//!
//! Items reference icons by key (`folder`, `info.circle`, `7.circle`, ...). The
//! set of keys is fixed at build time; [`resolve`] maps each key to a terminal
//! glyph. A key outside the set is a programming error reported as
//! [`OutlineError::Icon`].

use crate::domain::error::{OutlineError, Result};

/// Icon key used for folder nodes.
pub const FOLDER: &str = "folder";

/// Icon key shown when nothing is selected.
pub const DEFAULT_ICON: &str = "info.circle";

/// Highest number with a circled glyph.
pub const MAX_NUMBERED: usize = 50;

/// Circled digits 0..=50. Index is the number.
const NUMBERED_GLYPHS: [&str; MAX_NUMBERED + 1] = [
    "⓪", "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩", "⑪", "⑫", "⑬", "⑭", "⑮", "⑯",
    "⑰", "⑱", "⑲", "⑳", "㉑", "㉒", "㉓", "㉔", "㉕", "㉖", "㉗", "㉘", "㉙", "㉚", "㉛", "㉜",
    "㉝", "㉞", "㉟", "㊱", "㊲", "㊳", "㊴", "㊵", "㊶", "㊷", "㊸", "㊹", "㊺", "㊻", "㊼", "㊽",
    "㊾", "㊿",
];

/// Returns the numbered circle key for position `n`, wrapping past 50.
///
/// # Examples
///
/// ```
/// use zoutline::domain::icon;
///
/// assert_eq!(icon::numbered(7), "7.circle");
/// assert_eq!(icon::numbered(51), "0.circle");
/// ```
#[must_use]
pub fn numbered(n: usize) -> String {
    format!("{}.circle", n % (MAX_NUMBERED + 1))
}

/// Resolves an icon key to its glyph.
///
/// # Errors
///
/// Returns [`OutlineError::Icon`] if the key is not part of the built-in set.
///
/// # Examples
///
/// ```
/// use zoutline::domain::icon;
///
/// assert_eq!(icon::resolve("3.circle").unwrap(), "③");
/// assert!(icon::resolve("star.fill").is_err());
/// ```
pub fn resolve(key: &str) -> Result<&'static str> {
    match key {
        FOLDER => Ok("▣"),
        DEFAULT_ICON => Ok("ⓘ"),
        _ => key
            .strip_suffix(".circle")
            .filter(|digits| !digits.starts_with('+'))
            .and_then(|digits| digits.parse::<usize>().ok())
            .and_then(|n| NUMBERED_GLYPHS.get(n).copied())
            .ok_or_else(|| OutlineError::Icon(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_numbered_key_resolves() {
        for n in 0..=MAX_NUMBERED {
            assert!(resolve(&numbered(n)).is_ok(), "{n}.circle should resolve");
        }
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(resolve(FOLDER).ok(), Some("▣"));
        assert_eq!(resolve(DEFAULT_ICON).ok(), Some("ⓘ"));
    }

    #[test]
    fn unknown_keys_are_configuration_errors() {
        for key in ["51.circle", "circle", ".circle", "+3.circle", "-1.circle", "doc", ""] {
            assert!(
                matches!(resolve(key), Err(OutlineError::Icon(k)) if k == key),
                "{key:?} should not resolve"
            );
        }
    }
}
