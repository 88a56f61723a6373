//! Section identifier generation.
//!
//! Maps a heading title to a short anchor-safe identifier. ASCII letters,
//! digits, and CJK Unified Ideographs survive; everything else collapses
//! into hyphens. Identifiers are deterministic but NOT deduplicated:
//! repeated titles produce colliding ids, which the caller must tolerate.

/// CJK Unified Ideographs kept verbatim in identifiers.
fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Generates the identifier for a section title.
///
/// Lowercases the title, replaces runs of characters outside
/// `[a-z0-9]` and the CJK block with a single hyphen, strips a leading
/// and trailing hyphen, then truncates to 20 characters. Truncation runs
/// after hyphen normalization, so it can leave a dangling trailing
/// hyphen; that output is accepted as-is.
///
/// A title with no convertible characters (e.g. all punctuation) yields
/// an empty identifier.
///
/// # Examples
///
/// ```
/// use marknav_core::section_id;
///
/// assert_eq!(section_id("Hello World!"), "hello-world");
/// assert_eq!(section_id("你好 世界"), "你好-世界");
/// assert_eq!(section_id("!!!"), "");
/// ```
pub fn section_id(title: &str) -> String {
    let mut id = String::with_capacity(title.len());
    let mut prev_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || is_cjk(ch) {
            id.push(ch);
            prev_hyphen = false;
        } else if !prev_hyphen {
            id.push('-');
            prev_hyphen = true;
        }
    }

    let id = id.as_str();
    let id = id.strip_prefix('-').unwrap_or(id);
    let id = id.strip_suffix('-').unwrap_or(id);
    id.chars().take(20).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(section_id("Hello World!"), "hello-world");
    }

    #[test]
    fn cjk_preserved() {
        assert_eq!(section_id("你好 世界"), "你好-世界");
    }

    #[test]
    fn all_punctuation_yields_empty() {
        assert_eq!(section_id("!!!"), "");
        assert_eq!(section_id("---"), "");
        assert_eq!(section_id(""), "");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(section_id("a  -  b"), "a-b");
        assert_eq!(section_id("Tools & Services"), "tools-services");
    }

    #[test]
    fn leading_and_trailing_hyphens_stripped() {
        assert_eq!(section_id("  Hello  "), "hello");
        assert_eq!(section_id("(parens)"), "parens");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(section_id("Top 10 Sites"), "top-10-sites");
    }

    #[test]
    fn truncation_may_leave_trailing_hyphen() {
        // Normalizes to "this-is-a-very-long-heading", cut at 20 chars.
        assert_eq!(
            section_id("This is a very long heading"),
            "this-is-a-very-long-"
        );
    }

    #[test]
    fn mixed_cjk_and_ascii() {
        assert_eq!(section_id("开发 Tools"), "开发-tools");
    }

    #[test]
    fn accented_latin_becomes_hyphen() {
        // Outside [a-z0-9] and the CJK block, so replaced.
        assert_eq!(section_id("héllo"), "h-llo");
    }

    #[test]
    fn deterministic_and_colliding() {
        assert_eq!(section_id("Links"), section_id("links"));
        assert_eq!(section_id("Links!"), section_id("Links?"));
    }
}
