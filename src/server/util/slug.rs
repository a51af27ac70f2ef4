//! URL slugs for alliance pages.

/// Derives a URL-safe slug from an alliance name.
///
/// The name is lowercased, every run of characters outside `a-z0-9` becomes a single hyphen,
/// and leading or trailing hyphens are trimmed. Applying it to its own output returns the
/// same slug.
///
/// Returns an empty string for names with no ASCII letters or digits; callers decide on a
/// fallback.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug for an alliance, falling back to one built from the alliance ID when the name has
/// nothing slug-worthy in it.
pub fn alliance_slug(alliance_id: i64, name: &str) -> String {
    let slug = slugify(name);

    if slug.is_empty() {
        format!("alliance-{}", alliance_id)
    } else {
        slug
    }
}
