//! Text and HTML renderings of an [`AnalysisReport`].
//!
//! JSON output is `serde_json::to_string_pretty` of the report types and
//! needs no help from this module.

use std::fmt::Write as _;

use blogscore_core::{AnalysisReport, Priority};
use html_escape::{encode_double_quoted_attribute, encode_text};
use owo_colors::{OwoColorize, Stream};

/// Default file name for HTML reports.
pub const DEFAULT_HTML_REPORT: &str = "analysis_report.html";

/// Score band used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// 80 and above.
    Good,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Poor,
}

impl Band {
    /// Band for a 0–100 score.
    pub const fn of(score: u32) -> Self {
        if score >= 80 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    const fn css(self) -> &'static str {
        match self {
            Self::Good => "#2e7d32",
            Self::Fair => "#f9a825",
            Self::Poor => "#c62828",
        }
    }
}

/// `score` colored by band when stdout supports color.
pub fn colored_score(score: u32) -> String {
    let text = score.to_string();
    match Band::of(score) {
        Band::Good => text.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
        Band::Fair => text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
        Band::Poor => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
    }
}

fn label(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
}

fn priority_tag(priority: Priority) -> String {
    let tag = format!("[{priority}]");
    match priority {
        Priority::High => tag.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        Priority::Medium => tag.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
        Priority::Low => tag.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string(),
    }
}

/// Terminal summary of a full analysis.
pub fn text_report(report: &AnalysisReport, source: &str) -> String {
    let mut out = String::new();
    let h = &report.headline;
    let seo = &report.seo;
    let st = &report.structure;
    let r = &report.readability;
    let s = &report.stats;

    let _ = writeln!(
        out,
        "{}  overall {}/100",
        source.if_supports_color(Stream::Stdout, |t| t.bold()),
        colored_score(report.overall_score)
    );

    let _ = writeln!(
        out,
        "\n  {} {}/100, {} chars, emotional impact {}",
        label("Headline:"),
        colored_score(h.score),
        h.character_count,
        h.emotional_impact,
    );
    if !h.power_words.is_empty() {
        let words: Vec<&str> = h.power_words.iter().map(String::as_str).collect();
        let _ = writeln!(out, "    power words: {}", words.join(", "));
    }

    let _ = writeln!(
        out,
        "\n  {} {}/100, keywords {} in opening",
        label("SEO:"),
        colored_score(seo.score),
        if seo.keyword_prominence { "found" } else { "missing" },
    );
    for (keyword, density) in &seo.keyword_density {
        let _ = writeln!(out, "    {keyword}: {density:.2}%");
    }
    let _ = writeln!(out, "    title: {}", seo.title_tag);
    let _ = writeln!(out, "    slug:  {}", seo.url_slug);

    let _ = writeln!(
        out,
        "\n  {} {}/100, H1 {} / H2 {} / H3 {}, {:.1} sentences per paragraph, {} list items",
        label("Structure:"),
        colored_score(st.score),
        st.h1_count,
        st.h2_count,
        st.h3_count,
        st.avg_paragraph_length,
        st.list_count,
    );
    for warning in &st.warnings {
        let _ = writeln!(
            out,
            "    {} {warning}",
            "warning:".if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }

    let _ = writeln!(
        out,
        "\n  {} ease {:.1}, grade {:.1}, {:.1} words per sentence, {:.1}% passive",
        label("Readability:"),
        r.reading_ease,
        r.grade_level,
        r.avg_sentence_length,
        r.passive_voice_pct,
    );

    let _ = writeln!(
        out,
        "\n  {} {} words, {} sentences, {} paragraphs, ~{} min read",
        label("Stats:"),
        s.word_count,
        s.sentence_count,
        s.paragraph_count,
        s.reading_time_minutes,
    );

    if !report.recommendations.is_empty() {
        let _ = writeln!(out, "\n  {}", label("Recommendations:"));
        for rec in &report.recommendations {
            let _ = writeln!(
                out,
                "    {} {}: {}",
                priority_tag(rec.priority),
                rec.issue,
                rec.fix
            );
        }
    }

    out
}

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }
header { text-align: center; margin-bottom: 2rem; }
.score { font-size: 3rem; font-weight: bold; }
section { border: 1px solid #ddd; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1rem; }
table { border-collapse: collapse; width: 100%; }
td { padding: 0.25rem 0.5rem; border-bottom: 1px solid #eee; }
td:first-child { color: #666; width: 40%; }
.rec { border-left: 4px solid; padding: 0.5rem 1rem; margin: 0.5rem 0; }
.high { border-color: #c62828; }
.medium { border-color: #f9a825; }
.low { border-color: #1565c0; }
";

fn row(out: &mut String, name: &str, value: impl std::fmt::Display) {
    let _ = writeln!(
        out,
        "<tr><td>{}</td><td>{}</td></tr>",
        encode_text(name),
        encode_text(&value.to_string())
    );
}

fn section_start(out: &mut String, title: &str, score: Option<u32>) {
    let _ = write!(out, "<section><h2>{}", encode_text(title));
    if let Some(score) = score {
        let _ = write!(
            out,
            " <span style=\"color: {}\">{score}/100</span>",
            Band::of(score).css()
        );
    }
    out.push_str("</h2>\n<table>\n");
}

fn section_end(out: &mut String) {
    out.push_str("</table></section>\n");
}

/// Standalone HTML page for a full analysis.
pub fn html_report(report: &AnalysisReport, title: &str) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Blog Post Analysis: {title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n",
        title = encode_text(title),
    );
    let _ = writeln!(
        out,
        "<header><h1>{}</h1><div class=\"score\" style=\"color: {}\">{}/100</div></header>",
        encode_text(title),
        Band::of(report.overall_score).css(),
        report.overall_score
    );

    let h = &report.headline;
    section_start(&mut out, "Headline", Some(h.score));
    row(&mut out, "Characters", h.character_count);
    row(&mut out, "Emotional impact", h.emotional_impact);
    let words: Vec<&str> = h.power_words.iter().map(String::as_str).collect();
    row(&mut out, "Power words", words.join(", "));
    for suggestion in &h.suggestions {
        row(&mut out, "Suggestion", suggestion);
    }
    section_end(&mut out);

    let seo = &report.seo;
    section_start(&mut out, "SEO", Some(seo.score));
    for (keyword, density) in &seo.keyword_density {
        row(&mut out, &format!("Density: {keyword}"), format!("{density:.2}%"));
    }
    row(
        &mut out,
        "Keyword in first 100 words",
        if seo.keyword_prominence { "yes" } else { "no" },
    );
    row(&mut out, "Title tag", &seo.title_tag);
    row(&mut out, "Meta description", &seo.meta_description);
    row(&mut out, "URL slug", &seo.url_slug);
    section_end(&mut out);

    let st = &report.structure;
    section_start(&mut out, "Structure", Some(st.score));
    row(&mut out, "H1 / H2 / H3", format!("{} / {} / {}", st.h1_count, st.h2_count, st.h3_count));
    row(&mut out, "Sentences per paragraph", format!("{:.1}", st.avg_paragraph_length));
    row(&mut out, "List items", st.list_count);
    for warning in &st.warnings {
        row(&mut out, "Warning", warning);
    }
    section_end(&mut out);

    let r = &report.readability;
    section_start(&mut out, "Readability", None);
    row(&mut out, "Reading ease", format!("{:.1}", r.reading_ease));
    row(&mut out, "Grade level", format!("{:.1}", r.grade_level));
    row(&mut out, "Words per sentence", format!("{:.1}", r.avg_sentence_length));
    row(&mut out, "Passive voice", format!("{:.1}%", r.passive_voice_pct));
    row(&mut out, "Complexity", format!("{:.0}", r.complexity_score));
    section_end(&mut out);

    let s = &report.stats;
    section_start(&mut out, "Statistics", None);
    row(&mut out, "Words", s.word_count);
    row(&mut out, "Sentences", s.sentence_count);
    row(&mut out, "Paragraphs", s.paragraph_count);
    row(&mut out, "Characters", s.character_count);
    row(&mut out, "Reading time", format!("{} min", s.reading_time_minutes));
    section_end(&mut out);

    out.push_str("<section><h2>Recommendations</h2>\n");
    if report.recommendations.is_empty() {
        out.push_str("<p>No recommendations.</p>\n");
    }
    for rec in &report.recommendations {
        let _ = writeln!(
            out,
            "<div class=\"rec {class}\"><strong>[{p}] {issue}</strong><br>{fix}</div>",
            class = encode_double_quoted_attribute(rec.priority.as_str()),
            p = rec.priority.as_str(),
            issue = encode_text(&rec.issue),
            fix = encode_text(&rec.fix),
        );
    }
    out.push_str("</section>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogscore_core::PostAnalyzer;

    fn sample() -> AnalysisReport {
        PostAnalyzer::new().analyze_full(
            "# Ship <Fast>\n\nWrite short posts. Publish often. Repeat.\n\n- one\n- two",
            "Ship <Fast> & \"Often\"",
            &["posts"],
        )
    }

    #[test]
    fn bands() {
        assert_eq!(Band::of(100), Band::Good);
        assert_eq!(Band::of(80), Band::Good);
        assert_eq!(Band::of(79), Band::Fair);
        assert_eq!(Band::of(60), Band::Fair);
        assert_eq!(Band::of(59), Band::Poor);
        assert_eq!(Band::of(0), Band::Poor);
    }

    #[test]
    fn html_report_escapes_ampersands_in_titles() {
        let html = html_report(&sample(), "Tom & Jerry's <b>");
        assert!(html.contains("<title>Blog Post Analysis: Tom &amp; Jerry's &lt;b&gt;</title>"));
        assert!(html.contains("<h1>Tom &amp; Jerry's &lt;b&gt;</h1>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn html_report_is_escaped_and_complete() {
        let report = sample();
        let html = html_report(&report, "Ship <Fast>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Ship &lt;Fast&gt;"));
        assert!(!html.contains("<Fast>"));
        for heading in ["Headline", "SEO", "Structure", "Readability", "Statistics", "Recommendations"] {
            assert!(html.contains(&format!("<h2>{heading}")), "missing {heading}");
        }
        assert!(html.contains(&format!("{}/100", report.overall_score)));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn html_report_lists_recommendations_by_priority() {
        let report = sample();
        let html = html_report(&report, "t");
        for rec in &report.recommendations {
            assert!(html.contains(&format!("class=\"rec {}\"", rec.priority.as_str())));
        }
    }

    #[test]
    fn text_report_mentions_every_section() {
        let text = text_report(&sample(), "post.md");
        for label in ["Headline:", "SEO:", "Structure:", "Readability:", "Stats:"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("posts:"));
    }
}
