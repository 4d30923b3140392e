//! URL slugs for blog posts, projects and taxonomy.

use std::sync::LazyLock;

use regex::Regex;

/// Lowercase letters and digits in hyphen-separated runs.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is a valid regex")
});

/// Derive a slug from a title.
///
/// Characters outside `[a-z0-9 -]` are dropped after lowercasing, runs of
/// whitespace and hyphens collapse into a single hyphen, and leading or
/// trailing hyphens are trimmed. Returns an empty string when nothing
/// usable remains.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }

    slug
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Test Post"), "test-post");
    }

    #[test]
    fn slugify_strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  AI & Technology -- 2024!  "), "ai-technology-2024");
        assert_eq!(slugify("Hello,World"), "helloworld");
    }

    #[test]
    fn slugify_non_ascii_only_is_empty() {
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("test-post"));
        assert!(is_valid_slug("a1"));
        assert!(!is_valid_slug("Test-Post"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn slugify_output_is_always_valid_or_empty() {
        for title in ["Workshop: Rust 101", "Ceramah AI di Sekolah", "x", "--a--b--"] {
            let slug = slugify(title);
            assert!(slug.is_empty() || is_valid_slug(&slug), "{slug}");
        }
    }
}
