//! Review Markdown
//!
//! Renders review and comment bodies with pulldown-cmark, plus:
//! - Spoiler syntax: ||hidden text||
//! - Raw HTML in user input is shown as text, never injected
//! - `javascript:` links are neutralized

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

const SPOILER_MARK: &str = "||";
const SPOILER_OPEN: &str = r#"<span class="spoiler" tabindex="0">"#;
const SPOILER_CLOSE: &str = "</span>";

/// Render a user-written body to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render for one-line previews (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Where spoiler markers may apply
#[derive(Default)]
struct SpoilerState {
    /// Inline nesting depth (emphasis, links) at the current event
    depth: usize,
    /// Depth at which the open spoiler started
    open_at: Option<usize>,
    /// Code block text is literal
    in_code: bool,
}

impl SpoilerState {
    fn close(&mut self, events: &mut Vec<Event<'_>>) {
        if self.open_at.take().is_some() {
            events.push(Event::Html(CowStr::from(SPOILER_CLOSE)));
        }
    }
}

/// Transform parser events: merge text runs, expand spoilers, escape HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut pending_text = String::new();
    let mut state = SpoilerState::default();

    for event in parser {
        match event {
            Event::Text(text) => pending_text.push_str(&text),

            // User HTML is displayed literally
            Event::Html(html) | Event::InlineHtml(html) => pending_text.push_str(&html),

            other => {
                flush_text(&mut pending_text, &mut state, &mut events);
                match other {
                    Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                        state.depth += 1;
                        events.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url: sanitize_url(dest_url),
                            title,
                            id,
                        }));
                    }
                    Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                        state.depth += 1;
                        events.push(Event::Start(Tag::Image {
                            link_type,
                            dest_url: sanitize_url(dest_url),
                            title,
                            id,
                        }));
                    }
                    Event::Start(tag @ (Tag::Emphasis | Tag::Strong | Tag::Strikethrough)) => {
                        state.depth += 1;
                        events.push(Event::Start(tag));
                    }
                    // A spoiler opened inside an inline element ends with it
                    Event::End(
                        end @ (TagEnd::Emphasis
                        | TagEnd::Strong
                        | TagEnd::Strikethrough
                        | TagEnd::Link
                        | TagEnd::Image),
                    ) => {
                        if state.open_at == Some(state.depth) {
                            state.close(&mut events);
                        }
                        state.depth = state.depth.saturating_sub(1);
                        events.push(Event::End(end));
                    }
                    Event::Start(tag @ Tag::CodeBlock(_)) => {
                        state.close(&mut events);
                        state.in_code = true;
                        events.push(Event::Start(tag));
                    }
                    // A spoiler never leaks past its block
                    Event::End(
                        end @ (TagEnd::Paragraph
                        | TagEnd::Heading(_)
                        | TagEnd::Item
                        | TagEnd::CodeBlock),
                    ) => {
                        state.close(&mut events);
                        state.in_code = false;
                        state.depth = 0;
                        events.push(Event::End(end));
                    }
                    other => events.push(other),
                }
            }
        }
    }

    flush_text(&mut pending_text, &mut state, &mut events);
    state.close(&mut events);
    events
}

/// Emit buffered text, turning `||` into a spoiler boundary. A marker that
/// would close a spoiler opened at another nesting depth stays literal so
/// the spans always nest.
fn flush_text<'a>(pending: &mut String, state: &mut SpoilerState, events: &mut Vec<Event<'a>>) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    if state.in_code {
        events.push(Event::Text(CowStr::from(text)));
        return;
    }
    let mut segments = text.split(SPOILER_MARK).peekable();
    while let Some(segment) = segments.next() {
        if !segment.is_empty() {
            events.push(Event::Text(CowStr::from(segment.to_string())));
        }
        if segments.peek().is_none() {
            break;
        }
        match state.open_at {
            None => {
                events.push(Event::Html(CowStr::from(SPOILER_OPEN)));
                state.open_at = Some(state.depth);
            }
            Some(depth) if depth == state.depth => state.close(events),
            Some(_) => events.push(Event::Text(CowStr::from(SPOILER_MARK))),
        }
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_lowercase();
    if lower.starts_with("javascript:") || lower.starts_with("data:") || lower.starts_with("vbscript:") {
        CowStr::from("#")
    } else {
        url
    }
}

/// Plain-text excerpt for cards
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .replace(SPOILER_MARK, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
