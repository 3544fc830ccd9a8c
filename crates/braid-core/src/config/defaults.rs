// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 1;

// --- Weight policy ---
pub const LEXICAL_KEYWORDS: &[&str] = &["error", "bug", "crash", "code", "command", "syntax"];
pub const CONCEPTUAL_KEYWORDS: &[&str] = &["how", "why", "explain", "difference", "compare"];
pub const LEXICAL_WEIGHTS: (f64, f64) = (0.4, 0.6);
pub const CONCEPTUAL_WEIGHTS: (f64, f64) = (0.8, 0.2);
pub const DEFAULT_WEIGHTS: (f64, f64) = (0.7, 0.3);

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_RETRIEVAL_LOG_CAPACITY: usize = 10_000;
