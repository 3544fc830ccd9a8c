/// Distance recorded for the side of a candidate that the corresponding search
/// did not return. Accepted distances are always finite, so this is strictly
/// greater than any real distance.
pub const ABSENT_DISTANCE: f64 = f64::INFINITY;

/// Separator used when concatenating ranked chunks into an LLM context.
pub const DEFAULT_CONTEXT_SEPARATOR: &str = "\n\n";
