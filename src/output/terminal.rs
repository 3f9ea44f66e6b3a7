// Colored terminal output for analysis results.
//
// main.rs decides between JSON and text; every text rendering lives here.

use colored::Colorize;

use crate::engagement::EngagementReport;
use crate::moderation::scorer::ModerationResult;
use crate::moderation::status::ModerationStatus;
use crate::reports::{Recommendation, TrendReport};
use crate::sentiment::distribution::SentimentHistogram;
use crate::sentiment::scorer::{Assessment, SentimentResult};
use crate::topics::frequency::WordCount;
use crate::topics::similarity::RankedDocument;
use crate::topics::traits::TopicTerm;

const PREVIEW_CHARS: usize = 80;
const BAR_WIDTH: usize = 40;

/// Display per-document sentiment.
pub fn display_sentiment(docs: &[String], results: &[SentimentResult]) {
    println!(
        "\n{}",
        format!("=== Sentiment ({} documents) ===", results.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:>8}  {:>8}  {:<9}  {}",
        "#".dimmed(),
        "Polarity".dimmed(),
        "Subject.".dimmed(),
        "Label".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, (doc, result)) in docs.iter().zip(results).enumerate() {
        println!(
            "  {:>4}  {:>8.3}  {:>8.3}  {:<9}  {}",
            i + 1,
            result.polarity,
            result.subjectivity,
            colorize_assessment(result.assessment),
            super::truncate_chars(doc, PREVIEW_CHARS).dimmed(),
        );
    }
}

/// Display per-document moderation verdicts.
pub fn display_moderation(docs: &[String], results: &[ModerationResult]) {
    println!(
        "\n{}",
        format!("=== Moderation ({} documents) ===", results.len()).bold()
    );
    println!();

    for (i, (doc, result)) in docs.iter().zip(results).enumerate() {
        println!(
            "  {:>4}. [{:>3}/100] {:<12}  {}",
            i + 1,
            result.toxicity_score,
            colorize_status(result.status),
            super::truncate_chars(doc, PREVIEW_CHARS).dimmed(),
        );
        if !result.flagged_words.is_empty() {
            println!("        flagged: {}", result.flagged_words.join(", ").red());
        }
        if let Some(warning) = &result.warning {
            println!("        {} {}", "!".bright_red(), warning);
        }
    }

    println!();
    let high = results
        .iter()
        .filter(|r| r.status == ModerationStatus::HighRisk)
        .count();
    let review = results
        .iter()
        .filter(|r| r.status == ModerationStatus::NeedsReview)
        .count();
    if high > 0 {
        println!("  {} {} high-risk documents", "!!".red().bold(), high);
    }
    if review > 0 {
        println!("  {} {} documents need review", "!".yellow(), review);
    }
    if high == 0 && review == 0 {
        println!("  {} all documents safe", "ok".green());
    }
}

/// Display targets ranked by similarity to a source text.
pub fn display_similar(source: &str, targets: &[String], ranked: &[RankedDocument]) {
    println!(
        "\n{}",
        format!(
            "=== Similar to \"{}\" ===",
            super::truncate_chars(source, 40)
        )
        .bold()
    );
    println!();

    if ranked.is_empty() {
        println!("  No documents to compare against.");
        return;
    }

    for (rank, doc) in ranked.iter().enumerate() {
        let text = targets.get(doc.index).map(String::as_str).unwrap_or("");
        println!(
            "  {:>4}. [{:.3}] #{:<4} {}",
            rank + 1,
            doc.score,
            doc.index,
            super::truncate_chars(text, PREVIEW_CHARS).dimmed(),
        );
    }
}

/// Display central topic terms with their scores.
pub fn display_topics(topics: &[TopicTerm]) {
    if topics.is_empty() {
        println!("No topics found. The documents contain no usable terms.");
        return;
    }

    println!("\n{}", "=== Central Topics ===".bold());
    println!();
    for (i, topic) in topics.iter().enumerate() {
        println!("  {:>3}. {:<32} {:.4}", i + 1, topic.term.cyan(), topic.score);
    }
}

/// Display word counts, most frequent first.
pub fn display_word_counts(counts: &[WordCount]) {
    if counts.is_empty() {
        println!("No words found.");
        return;
    }

    println!("\n{}", "=== Top Words ===".bold());
    println!();
    let max = counts.first().map(|c| c.count).unwrap_or(1).max(1);
    for count in counts {
        println!(
            "  {:<20} {:>5}  {}",
            count.term,
            count.count,
            bar(count.count, max).blue()
        );
    }
}

pub fn display_trend_report(report: &TrendReport) {
    println!(
        "\n{}",
        format!("=== Trends ({} documents) ===", report.document_count).bold()
    );

    if report.trending_topics.is_empty() {
        println!("\n  No trending topics.");
    } else {
        println!("\n  Trending topics: {}", report.trending_topics.join(", ").cyan());
    }

    display_word_counts(&report.top_words);
}

pub fn display_recommendation(rec: &Recommendation, corpus: &[String]) {
    println!("\n{}", "=== Recommendations ===".bold());

    println!("\n  Themes:");
    if rec.recommended_themes.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for theme in &rec.recommended_themes {
        println!("    - {}", theme.cyan());
    }

    println!("\n  Similar documents:");
    if rec.similar_documents.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for index in &rec.similar_documents {
        let text = corpus.get(*index).map(String::as_str).unwrap_or("");
        println!(
            "    #{:<4} {}",
            index,
            super::truncate_chars(text, PREVIEW_CHARS).dimmed()
        );
    }

    if !rec.trending_topics.is_empty() {
        println!("\n  Trending: {}", rec.trending_topics.join(", "));
    }
}

/// Display a polarity histogram as horizontal bars.
pub fn display_histogram(hist: &SentimentHistogram) {
    println!("\n{}", "=== Sentiment Distribution ===".bold());
    println!();

    let max = hist.counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, count) in hist.counts.iter().enumerate() {
        let (lo, hi) = (hist.edges[i], hist.edges[i + 1]);
        let bar = bar(*count, max);
        let bar = if hi <= 0.0 { bar.red() } else { bar.green() };
        println!("  [{:>5.2}, {:>5.2})  {:>5}  {}", lo, hi, count, bar);
    }
}

/// Display hourly engagement bars, then per-type daily and weekday tables.
pub fn display_engagement(report: &EngagementReport) {
    if report.is_empty() {
        println!("No activity found.");
        return;
    }

    println!("\n{}", "=== Hourly Engagement ===".bold());
    println!();
    let max = report.hourly_engagement.values().copied().max().unwrap_or(0).max(1);
    for (hour, count) in &report.hourly_engagement {
        println!(
            "  {}  {:>5}  {}",
            hour.format("%Y-%m-%d %H:00"),
            count,
            bar(*count, max).blue()
        );
    }

    println!("\n{}", "=== Daily Trends ===".bold());
    for (kind, days) in &report.daily_trends {
        println!("\n  {}", kind.cyan());
        for (day, count) in days {
            let count = if *count == 0 {
                count.to_string().dimmed()
            } else {
                count.to_string().normal()
            };
            println!("    {}  {:>5}", day, count);
        }
    }

    println!("\n{}", "=== By Weekday ===".bold());
    for (kind, weekdays) in &report.weekly_correlation {
        let cells: Vec<String> = weekdays
            .iter()
            .map(|(weekday, count)| format!("{weekday} {count}"))
            .collect();
        println!("\n  {:<16} {}", kind.cyan(), cells.join(", "));
    }
}

fn bar(count: usize, max: usize) -> String {
    "#".repeat(count * BAR_WIDTH / max)
}

fn colorize_assessment(assessment: Assessment) -> colored::ColoredString {
    match assessment {
        Assessment::Positive => assessment.as_str().green(),
        Assessment::Negative => assessment.as_str().red(),
    }
}

fn colorize_status(status: ModerationStatus) -> colored::ColoredString {
    match status {
        ModerationStatus::Safe => status.as_str().green(),
        ModerationStatus::NeedsReview => status.as_str().yellow(),
        ModerationStatus::HighRisk => status.as_str().red().bold(),
    }
}
