use std::time::Duration;

use braid_core::config::ObservabilityConfig;
use braid_core::models::{FusionReport, QueryClass, RankedItem, SourceCounts, WeightPair};
use braid_core::traits::IRetrievalSink;
use braid_observability::tracing_setup::spans::names;
use braid_observability::{
    init_tracing, init_tracing_from_config, init_tracing_with_filter, RetrievalLog,
    RetrievalLogEntry,
};

fn report(citations: &[Option<&str>], counts: SourceCounts) -> FusionReport {
    FusionReport {
        query_class: QueryClass::Lexical,
        weights: WeightPair::new(0.4, 0.6),
        counts,
        items: citations
            .iter()
            .enumerate()
            .map(|(i, doc)| RankedItem {
                content_key: format!("chunk-{i}"),
                document_id: doc.map(String::from),
                rank: i + 1,
                combined_score: 0.1 * (i + 1) as f64,
            })
            .collect(),
    }
}

fn counts(merged: usize, overlap: usize) -> SourceCounts {
    SourceCounts {
        dense: merged,
        sparse: merged,
        merged,
        overlap,
    }
}

#[test]
fn entry_copies_report_metadata() {
    let r = report(&[Some("doc-1"), None, Some("doc-2")], counts(5, 2));
    let entry = RetrievalLogEntry::from_report("crash on start", &r, Duration::from_millis(12));

    assert_eq!(entry.query, "crash on start");
    assert_eq!(entry.query_class, QueryClass::Lexical);
    assert_eq!(entry.weights, WeightPair::new(0.4, 0.6));
    assert_eq!(entry.result_count, 3);
    assert_eq!(entry.merged_count, 5);
    assert_eq!(entry.overlap_count, 2);
    assert_eq!(entry.citations, vec!["doc-1", "doc-2"]);
    assert!(entry.timestamp_epoch_ms > 0);
}

#[test]
fn entries_get_distinct_ids() {
    let r = report(&[], counts(0, 0));
    let a = RetrievalLogEntry::from_report("q", &r, Duration::ZERO);
    let b = RetrievalLogEntry::from_report("q", &r, Duration::ZERO);
    assert_ne!(a.query_id, b.query_id);
}

#[test]
fn log_is_bounded_and_drops_oldest() {
    let log = RetrievalLog::with_capacity(2);
    let r = report(&[], counts(0, 0));
    for q in ["one", "two", "three"] {
        log.record(q, &r, Duration::from_millis(1));
    }
    let queries: Vec<String> = log.entries().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["two", "three"]);
}

#[test]
fn zero_capacity_log_keeps_nothing() {
    let log = RetrievalLog::with_capacity(0);
    log.record("q", &report(&[], counts(0, 0)), Duration::ZERO);
    assert!(log.is_empty());
}

#[test]
fn log_capacity_comes_from_config() {
    let config = ObservabilityConfig {
        retrieval_log_capacity: 1,
        ..ObservabilityConfig::default()
    };
    let log = RetrievalLog::from_config(&config);
    let r = report(&[], counts(0, 0));
    log.record("first", &r, Duration::ZERO);
    log.record("second", &r, Duration::ZERO);

    let queries: Vec<String> = log.entries().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["second"]);
}

#[test]
fn avg_latency_over_entries() {
    let log = RetrievalLog::new();
    assert_eq!(log.avg_latency(), Duration::ZERO);
    let r = report(&[], counts(0, 0));
    log.record("a", &r, Duration::from_millis(10));
    log.record("b", &r, Duration::from_millis(30));
    assert_eq!(log.avg_latency(), Duration::from_millis(20));
}

#[test]
fn overlap_ratio_skips_empty_entries() {
    let log = RetrievalLog::new();
    log.record("a", &report(&[], counts(4, 2)), Duration::ZERO);
    log.record("b", &report(&[], counts(4, 4)), Duration::ZERO);
    log.record("c", &report(&[], counts(0, 0)), Duration::ZERO);
    assert!((log.overlap_ratio() - 0.75).abs() < 1e-12);
}

#[test]
fn citation_counts_aggregate_documents() {
    let log = RetrievalLog::new();
    log.record("a", &report(&[Some("d1"), Some("d2")], counts(2, 2)), Duration::ZERO);
    log.record("b", &report(&[Some("d1"), None], counts(2, 1)), Duration::ZERO);

    let counts = log.citation_counts();
    assert_eq!(counts["d1"], 2);
    assert_eq!(counts["d2"], 1);
    assert_eq!(counts.len(), 2);
}

#[test]
fn json_lines_one_per_entry() {
    let log = RetrievalLog::new();
    let r = report(&[Some("d1")], counts(1, 1));
    log.record("a", &r, Duration::ZERO);
    log.record("b", &r, Duration::ZERO);

    let out = log.to_json_lines().unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["query"], "a");
    assert_eq!(first["query_class"], "lexical");
    assert_eq!(first["citations"][0], "d1");
}

#[test]
fn clear_empties_the_log() {
    let log = RetrievalLog::new();
    log.record("a", &report(&[], counts(0, 0)), Duration::ZERO);
    assert_eq!(log.len(), 1);
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn log_is_shareable_across_threads() {
    let log = RetrievalLog::new();
    let r = report(&[], counts(1, 1));
    std::thread::scope(|s| {
        for t in 0..4 {
            let (log, r) = (&log, &r);
            s.spawn(move || {
                for i in 0..25 {
                    log.record(&format!("t{t}-{i}"), r, Duration::ZERO);
                }
            });
        }
    });
    assert_eq!(log.len(), 100);
}

#[test]
fn span_macros_use_documented_names() {
    let fusion = braid_observability::fusion_span!(QueryClass::General, 4);
    let retrieval = braid_observability::retrieval_span!("query", 4);
    // Without a subscriber spans are disabled; metadata is still static.
    if let Some(meta) = fusion.metadata() {
        assert_eq!(meta.name(), names::FUSION);
    }
    if let Some(meta) = retrieval.metadata() {
        assert_eq!(meta.name(), names::RETRIEVAL);
    }
}

// Tests share one process, so only one initializer can win. Each asserts
// that a second install reports `false` instead of panicking.

#[test]
fn tracing_init_from_config_is_idempotent() {
    let config = ObservabilityConfig {
        json_logs: false,
        ..ObservabilityConfig::default()
    };
    let _ = init_tracing_from_config(&config);
    assert!(!init_tracing_from_config(&config));
}

#[test]
fn tracing_init_is_idempotent() {
    let _ = init_tracing();
    assert!(!init_tracing());
}

#[test]
fn tracing_init_with_filter_is_idempotent() {
    let _ = init_tracing_with_filter("braid=debug");
    assert!(!init_tracing_with_filter("braid=debug"));
}
