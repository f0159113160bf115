//! Minimal markdown rendering for section bodies
//!
//! Supports paragraphs, `-` bullet lists, `1.` ordered lists, `>` quotes,
//! hard line breaks (two trailing spaces), `**bold**`, `*italic*` and
//! `[text](url)` links. Text is HTML-escaped before any markup is added.

use lazy_static::lazy_static;
use quick_xml::escape::escape;
use regex::Regex;

lazy_static! {
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern is valid");
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid");
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid");
    static ref ORDERED_ITEM: Regex = Regex::new(r"^\d+\.\s+(.*)$").expect("ordered item pattern is valid");
}

/// Block-level element recognised in a body
#[derive(Debug, Clone, PartialEq)]
enum Block {
    Paragraph(Vec<Line>),
    Bullets(Vec<String>),
    Ordered(Vec<String>),
    Quote(Vec<Line>),
}

#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    hard_break: bool,
}

/// Render inline markup in a single line of text
pub fn render_inline(text: &str) -> String {
    let escaped = escape(text);
    let linked = LINK.replace_all(&escaped, r#"<a href="$2">$1</a>"#);
    let bold = BOLD.replace_all(&linked, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Render a markdown body into HTML
pub fn render_blocks(body: &str) -> String {
    let mut html = String::new();

    for block in parse_blocks(body) {
        match block {
            Block::Paragraph(lines) => {
                html.push_str("<p>");
                html.push_str(&join_lines(&lines));
                html.push_str("</p>\n");
            }
            Block::Quote(lines) => {
                html.push_str("<blockquote><p>");
                html.push_str(&join_lines(&lines));
                html.push_str("</p></blockquote>\n");
            }
            Block::Bullets(items) => push_list(&mut html, "ul", &items),
            Block::Ordered(items) => push_list(&mut html, "ol", &items),
        }
    }

    html
}

fn parse_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for raw in body.lines() {
        let hard_break = raw.ends_with("  ");
        let line = raw.trim();

        if line.is_empty() {
            blocks.extend(current.take());
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            match current.as_mut() {
                Some(Block::Bullets(items)) => items.push(item.trim().to_string()),
                _ => {
                    blocks.extend(current.take());
                    current = Some(Block::Bullets(vec![item.trim().to_string()]));
                }
            }
        } else if let Some(caps) = ORDERED_ITEM.captures(line) {
            let item = caps[1].trim().to_string();
            match current.as_mut() {
                Some(Block::Ordered(items)) => items.push(item),
                _ => {
                    blocks.extend(current.take());
                    current = Some(Block::Ordered(vec![item]));
                }
            }
        } else if let Some(quoted) = line.strip_prefix('>') {
            let quoted = Line { text: quoted.trim().to_string(), hard_break };
            match current.as_mut() {
                Some(Block::Quote(lines)) => lines.push(quoted),
                _ => {
                    blocks.extend(current.take());
                    current = Some(Block::Quote(vec![quoted]));
                }
            }
        } else {
            let text = Line { text: line.to_string(), hard_break };
            match current.as_mut() {
                Some(Block::Paragraph(lines)) => lines.push(text),
                _ => {
                    blocks.extend(current.take());
                    current = Some(Block::Paragraph(vec![text]));
                }
            }
        }
    }

    blocks.extend(current);
    blocks
}

fn join_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&render_inline(&line.text));
        if i + 1 < lines.len() {
            out.push_str(if line.hard_break { "<br>\n" } else { " " });
        }
    }
    out
}

fn push_list(html: &mut String, tag: &str, items: &[String]) {
    html.push_str(&format!("<{}>\n", tag));
    for item in items {
        html.push_str("<li>");
        html.push_str(&render_inline(item));
        html.push_str("</li>\n");
    }
    html.push_str(&format!("</{}>\n", tag));
}
