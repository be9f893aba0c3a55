use analyzer_core::{AppViewModel, DisplayModel, FailureView, Phase};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("Status: {}", phase_label(view.phase))];

    match &view.selected_file {
        Some(file) => lines.push(format!(
            "Selected file: {} ({}, {} bytes)",
            file.name, file.mime_type, file.size
        )),
        None => lines.push("Open a PDF, Word or text document to analyze.".to_string()),
    }
    if let Some(error) = &view.selection_error {
        lines.push(format!("Cannot use that file: {error}"));
    }
    if let Some(failure) = &view.failure {
        lines.push(failure.message.clone());
        lines.push(format!("  ({})", failure_reason(failure)));
    }
    if let Some(result) = &view.result {
        render_result(result, &mut lines);
    }

    let mut actions = Vec::new();
    if view.can_analyze {
        actions.push("analyze");
    }
    if view.can_retry {
        actions.push("retry");
    }
    if !actions.is_empty() {
        lines.push(format!("Next: {}", actions.join(" | ")));
    }
    lines
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Waiting for a document",
        Phase::Ready => "Ready",
        Phase::Analyzing => "Analyzing...",
        Phase::Succeeded => "Done",
        Phase::Failed => "Failed",
    }
}

fn failure_reason(failure: &FailureView) -> String {
    let kind = match failure.status {
        Some(status) => format!("{} {}", failure.kind, status),
        None => failure.kind.to_string(),
    };
    if failure.detail.is_empty() {
        kind
    } else {
        format!("{kind}: {}", failure.detail)
    }
}

fn render_result(result: &DisplayModel, lines: &mut Vec<String>) {
    lines.push("Analysis Results".to_string());
    lines.push("  Summary".to_string());
    lines.push(format!("    {}", result.summary.trim()));
    lines.push("  Key Points".to_string());
    lines.extend(non_blank(&result.key_points).map(|point| format!("    - {point}")));
    lines.push("  Sentiment".to_string());
    lines.push(format!(
        "    {} [{}]",
        result.sentiment.trim(),
        result.sentiment_bucket.as_str()
    ));
    lines.push("  Topics".to_string());
    let topics: Vec<&str> = non_blank(&result.topics).collect();
    lines.push(format!("    {}", topics.join(", ")));
}

// The service splits model output on newlines; blank entries print as nothing.
fn non_blank(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(|item| item.trim()).filter(|item| !item.is_empty())
}
