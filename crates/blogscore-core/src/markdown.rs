//! Markdown helpers used outside the scoring path.
//!
//! Analyzers work on raw text with line-based heuristics. Title extraction is
//! the exception: it goes through pulldown-cmark so that `#` lines inside code
//! fences or frontmatter are not mistaken for the post title.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// First level-1 heading of `content`, with inline formatting removed.
///
/// Returns `None` when the post has no non-blank H1.
#[tracing::instrument(skip_all, fields(input_len = content.len()))]
pub fn extract_title(content: &str) -> Option<String> {
    let body = strip_frontmatter(content);
    let parser = Parser::new_ext(body, Options::ENABLE_STRIKETHROUGH);

    let mut in_title = false;
    let mut title = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                in_title = true;
                title.clear();
            }
            Event::Text(t) | Event::Code(t) if in_title => title.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_title => title.push(' '),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                in_title = false;
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Body of `content` after a leading `---` ... `---` YAML block, if any.
pub fn strip_frontmatter(content: &str) -> &str {
    let Some(rest) = content.trim_start().strip_prefix("---") else {
        return content;
    };
    let Some(close) = rest.find("\n---") else {
        return content;
    };
    let after = &rest[close + 4..];
    // Skip the remainder of the closing delimiter line.
    after.find('\n').map_or("", |nl| &after[nl + 1..])
}
