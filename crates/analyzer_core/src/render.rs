use std::collections::HashSet;

use crate::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

impl SentimentBucket {
    /// Case-insensitive substring match; "positive" wins over "negative".
    pub fn classify(sentiment: &str) -> Self {
        let lowered = sentiment.to_lowercase();
        if lowered.contains("positive") {
            SentimentBucket::Positive
        } else if lowered.contains("negative") {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Positive => "positive",
            SentimentBucket::Negative => "negative",
            SentimentBucket::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub summary: String,
    pub key_points: Vec<String>,
    /// Verbatim sentiment text from the service.
    pub sentiment: String,
    pub sentiment_bucket: SentimentBucket,
    pub topics: Vec<String>,
}

/// Pure projection of a result into what the result panel shows.
pub fn present(result: &AnalysisResult) -> DisplayModel {
    DisplayModel {
        summary: result.summary.clone(),
        key_points: result.key_points.clone(),
        sentiment: result.sentiment.clone(),
        sentiment_bucket: SentimentBucket::classify(&result.sentiment),
        topics: dedupe_in_order(&result.topics),
    }
}

fn dedupe_in_order(topics: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for topic in topics {
        if seen.insert(topic.as_str()) {
            unique.push(topic.clone());
        }
    }
    unique
}
