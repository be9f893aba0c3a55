use analyzer_core::{present, AnalysisResult, SentimentBucket};
use pretty_assertions::assert_eq;

fn result_with(sentiment: &str, topics: &[&str]) -> AnalysisResult {
    AnalysisResult {
        summary: "Quarterly numbers are up.".to_string(),
        key_points: vec!["Revenue grew".to_string(), "Costs fell".to_string()],
        sentiment: sentiment.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn sentiment_buckets_match_substrings_case_insensitively() {
    let cases = [
        ("Positive", SentimentBucket::Positive),
        ("The tone is mostly POSITIVE.", SentimentBucket::Positive),
        ("negative", SentimentBucket::Negative),
        ("Somewhat Negative overall", SentimentBucket::Negative),
        ("Neutral", SentimentBucket::Neutral),
        ("", SentimentBucket::Neutral),
        ("mixed", SentimentBucket::Neutral),
    ];
    for (sentiment, expected) in cases {
        assert_eq!(SentimentBucket::classify(sentiment), expected, "{sentiment}");
    }
}

#[test]
fn positive_takes_precedence_over_negative() {
    assert_eq!(
        SentimentBucket::classify("not negative, rather positive"),
        SentimentBucket::Positive
    );
}

#[test]
fn sentiment_text_is_kept_verbatim() {
    let display = present(&result_with("  Mostly Negative\n", &[]));

    assert_eq!(display.sentiment, "  Mostly Negative\n");
    assert_eq!(display.sentiment_bucket, SentimentBucket::Negative);
    assert_eq!(display.sentiment_bucket.as_str(), "negative");
}

#[test]
fn topics_are_deduplicated_in_first_occurrence_order() {
    let display = present(&result_with("neutral", &["y", "x", "y", "z", "x"]));

    assert_eq!(display.topics, vec!["y", "x", "z"]);
}

#[test]
fn blank_entries_are_kept_and_blank_topics_dedupe_like_any_other() {
    let result = AnalysisResult {
        summary: "S".to_string(),
        key_points: vec!["a".to_string(), "".to_string(), "b".to_string()],
        sentiment: "positive".to_string(),
        topics: vec![
            "x".to_string(),
            " ".to_string(),
            "x".to_string(),
            " ".to_string(),
            "y".to_string(),
        ],
    };

    let display = present(&result);

    assert_eq!(display.key_points, vec!["a", "", "b"]);
    assert_eq!(display.topics, vec!["x", " ", "y"]);
}

#[test]
fn present_is_idempotent_and_leaves_input_untouched() {
    let result = result_with("Positive", &["x", "x", "y"]);
    let before = result.clone();

    let first = present(&result);
    let second = present(&result);

    assert_eq!(first, second);
    assert_eq!(result, before);
    assert_eq!(first.summary, result.summary);
    assert_eq!(first.key_points, result.key_points);
}
