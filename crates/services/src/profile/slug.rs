/// Derive the permanent public slug from a startup name.
///
/// Pure and deterministic: lowercase, every maximal run of characters
/// outside `[a-z0-9]` collapses to a single hyphen, leading and trailing
/// hyphens stripped. No uniqueness check happens here; collision policy
/// lives with the publisher.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
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
