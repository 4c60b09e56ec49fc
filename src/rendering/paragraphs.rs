//! In-content insertion after a paragraph boundary.

const PARAGRAPH_END: &str = "</p>";

/// Appends `ad` after the `position`-th paragraph of `content` (1-based).
///
/// Content is split on `</p>`; every fragment with non-blank text gets its
/// `</p>` back. A position past the last fragment appends to the end.
/// Position 0 means "not configured" and returns the content unchanged.
pub fn insert_at(content: &str, ad: &str, position: usize) -> String {
    if position == 0 {
        return content.to_string();
    }

    let mut fragments: Vec<String> = content
        .split(PARAGRAPH_END)
        .map(|fragment| {
            if fragment.trim().is_empty() {
                fragment.to_string()
            } else {
                format!("{}{}", fragment, PARAGRAPH_END)
            }
        })
        .collect();

    let index = position.min(fragments.len()) - 1;
    fragments[index].push_str(ad);

    fragments.concat()
}
