//! Smoke test for sensitive-words
//!
//! Run with `RUST_LOG=debug` to see dictionary publication events.

use sensitive_words::{FilterConfig, MatchPolicy, SensitiveWordFilter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Running sensitive-words smoke tests...\n");

    test_greedy_match();
    test_simple_match();
    test_evasion();
    test_incremental_add();
    test_rebuild();
    test_rejected_word();

    println!("\n✅ All smoke tests passed!");
}

fn test_greedy_match() {
    let filter =
        SensitiveWordFilter::with_words(FilterConfig::default(), ["敏感", "敏感词"]).unwrap();

    assert!(filter.contains("这是敏感词库"));
    assert_eq!(filter.find_all("这是敏感词库"), vec!["敏感词"]);
    assert_eq!(filter.replace("这是敏感词库", "*"), "这是***库");
    println!("✓ Greedy match");
}

fn test_simple_match() {
    let config = FilterConfig::default().with_match_policy(MatchPolicy::Simple);
    let filter = SensitiveWordFilter::with_words(config, ["敏感", "敏感词"]).unwrap();

    assert_eq!(filter.find_all("这是敏感词库"), vec!["敏感"]);
    println!("✓ Simple match");
}

fn test_evasion() {
    let filter = SensitiveWordFilter::with_words(FilterConfig::default(), ["badword"]).unwrap();

    let text = "this is b-a-d-w-o-r-d here";
    assert_eq!(filter.find_all(text), vec!["b-a-d-w-o-r-d"]);
    assert_eq!(filter.redact(text), "this is ************* here");
    println!("✓ Separator evasion");
}

fn test_incremental_add() {
    let filter = SensitiveWordFilter::default();
    assert!(!filter.contains("spam and eggs"));

    filter.add_word("spam").unwrap();
    filter.add_words(["eggs", "ham"]).unwrap();
    assert_eq!(filter.find_all("spam and eggs"), vec!["eggs", "spam"]);
    println!("✓ Incremental add");
}

fn test_rebuild() {
    let filter = SensitiveWordFilter::with_words(FilterConfig::default(), ["aa", "bb"]).unwrap();
    assert_eq!(filter.replace("aabbaa", "*"), "******");

    filter.set_dictionary(["cc"]).unwrap();
    assert!(!filter.contains("aabbaa"));
    assert!(filter.contains("abcc"));
    println!("✓ Wholesale rebuild");
}

fn test_rejected_word() {
    let filter = SensitiveWordFilter::default();
    let err = filter.add_word(" - ").unwrap_err();
    println!("✓ Rejected word: {}", err);
}
