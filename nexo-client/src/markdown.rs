//! Markdown to plain text, good enough for blog list previews.
//!
//! This is a handful of regex substitutions, not a Markdown parser: nested or
//! unbalanced markup (eg. `*a **b* c**`, or underscores inside words) may be
//! stripped incorrectly.
//!
//! Fenced code blocks and horizontal rules are removed before any inline markup.

use regex::Regex;

/// Number of characters shown for a post in the blog list
pub const EXCERPT_LEN: usize = 150;

lazy_static::lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```.*?```").expect("invalid fenced code regex");
    static ref HORIZONTAL_RULE: Regex = Regex::new(
        r"(?m)^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$"
    ).expect("invalid horizontal rule regex");
    static ref HEADER: Regex = Regex::new(r"(?m)^#+[ \t]+").expect("invalid header regex");
    // No backreferences in `regex`, so one pattern per delimiter, longest first
    static ref EMPHASIS: [Regex; 4] = [
        Regex::new(r"\*\*(.*?)\*\*").expect("invalid bold regex"),
        Regex::new(r"__(.*?)__").expect("invalid bold regex"),
        Regex::new(r"\*(.*?)\*").expect("invalid italics regex"),
        Regex::new(r"_(.*?)_").expect("invalid italics regex"),
    ];
    static ref STRIKETHROUGH: Regex = Regex::new(r"~~(.*?)~~").expect("invalid strikethrough regex");
    static ref INLINE_CODE: Regex = Regex::new(r"`(.*?)`").expect("invalid inline code regex");
    static ref IMAGE: Regex = Regex::new(r"!\[(.*?)\]\(.*?\)").expect("invalid image regex");
    static ref LINK: Regex = Regex::new(r"\[(.*?)\]\(.*?\)").expect("invalid link regex");
    static ref BLOCKQUOTE: Regex = Regex::new(r"(?m)^>[ \t]+").expect("invalid blockquote regex");
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+").expect("invalid list item regex");
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").expect("invalid blank lines regex");
}

/// Strips Markdown markup from `markdown`, keeping the visible text.
///
/// `None` and the empty string both give an empty string.
pub fn strip_markdown<'a>(markdown: impl Into<Option<&'a str>>) -> String {
    let text = match markdown.into() {
        None | Some("") => return String::new(),
        Some(text) => text,
    };

    // Block-level removals go first: with inline code handled before them, the
    // backticks of a fence would be eaten pairwise and the block would survive
    let mut text = FENCED_CODE.replace_all(text, "").into_owned();
    text = HORIZONTAL_RULE.replace_all(&text, "").into_owned();

    text = HEADER.replace_all(&text, "").into_owned();
    for emphasis in EMPHASIS.iter() {
        text = emphasis.replace_all(&text, "${1}").into_owned();
    }
    text = STRIKETHROUGH.replace_all(&text, "${1}").into_owned();
    text = INLINE_CODE.replace_all(&text, "${1}").into_owned();
    text = IMAGE.replace_all(&text, "${1}").into_owned();
    text = LINK.replace_all(&text, "${1}").into_owned();
    text = BLOCKQUOTE.replace_all(&text, "").into_owned();
    text = LIST_ITEM.replace_all(&text, "").into_owned();
    text = BLANK_LINES.replace_all(&text, "\n").into_owned();
    text.trim().to_string()
}

/// Plain-text preview of `markdown`, cut to at most `max_chars` characters
/// followed by `...` when anything was cut
pub fn excerpt<'a>(markdown: impl Into<Option<&'a str>>, max_chars: usize) -> String {
    let text = strip_markdown(markdown);
    match text.char_indices().nth(max_chars) {
        None => text,
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
    }
}
