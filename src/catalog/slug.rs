//! URL slug generation for catalog entities
//!
//! Slugs are derived from titles when the client does not supply one:
//! lowercase ASCII, runs of non-alphanumeric characters collapsed to a
//! single hyphen, no leading/trailing hyphens.

/// Derive a URL slug from a display name
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Use the provided slug if present, otherwise derive one from the name
pub fn slug_or_derive(slug: Option<&str>, name: &str) -> String {
    match slug {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => slugify(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Home Appliances"), "home-appliances");
        assert_eq!(slugify("TVs & Monitors"), "tvs-monitors");
        assert_eq!(slugify("iPhone 15 Pro"), "iphone-15-pro");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn test_slugify_non_ascii_dropped() {
        // Non-ASCII letters are treated as separators
        assert_eq!(slugify("kir yuvish mashinasi"), "kir-yuvish-mashinasi");
        assert_eq!(slugify("café"), "caf");
    }

    #[test]
    fn test_slug_or_derive() {
        assert_eq!(slug_or_derive(Some("custom-slug"), "Name"), "custom-slug");
        assert_eq!(slug_or_derive(Some("   "), "Some Name"), "some-name");
        assert_eq!(slug_or_derive(None, "Some Name"), "some-name");
    }
}
