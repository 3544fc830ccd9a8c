//! Context assembly for the downstream LLM prompt.

use braid_core::constants::DEFAULT_CONTEXT_SEPARATOR;
use braid_core::models::RankedItem;

/// Concatenate ranked chunks in rank order.
pub fn build_context(items: &[RankedItem], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.content_key.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// [`build_context`] with the default blank-line separator.
pub fn build_default_context(items: &[RankedItem]) -> String {
    build_context(items, DEFAULT_CONTEXT_SEPARATOR)
}

/// Concatenate ranked chunks until the next one would exceed `max_chars`.
///
/// Items are never split; a first item longer than the budget yields an
/// empty context. Lengths are counted in chars, not bytes.
pub fn build_context_with_budget(items: &[RankedItem], separator: &str, max_chars: usize) -> String {
    let sep_len = separator.chars().count();
    let mut used = 0usize;
    let mut parts: Vec<&str> = Vec::new();

    for item in items {
        let len = item.content_key.chars().count();
        let cost = if parts.is_empty() { len } else { len + sep_len };
        if used + cost > max_chars {
            break;
        }
        used += cost;
        parts.push(&item.content_key);
    }

    parts.join(separator)
}
