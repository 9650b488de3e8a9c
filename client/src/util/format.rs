//! Reply-to-HTML formatting for chat transcripts.
//!
//! DESIGN
//! ======
//! Backend replies are plain text that may embed triple-backtick fenced
//! code blocks. The whole reply is escaped first, then fenced regions are
//! rebuilt as `<pre><code>` blocks (inner newlines preserved) and the
//! remaining newlines become `<br>`, so the result is safe to assign as
//! markup. A newline directly after a closing `</pre>` stays literal so
//! code blocks do not pick up a trailing break.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use once_cell::sync::Lazy;
use regex::Regex;

/// Fenced block: an optional language tag on the opening marker, then
/// non-greedy content up to the closing marker.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(\w*)\n((?s).*?)```").expect("fence pattern is valid"));

/// Escape `&`, `<`, `>` for HTML embedding. Ampersand first so earlier
/// replacements are not double-escaped.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Convert a raw backend reply into transcript HTML.
///
/// An unterminated fence never matches, so its markers remain visible as
/// escaped text and its newlines convert like any other.
pub fn format_reply(reply: &str) -> String {
    let escaped = escape_html(reply);
    let mut out = String::with_capacity(escaped.len());
    let mut cursor = 0;
    let mut after_fence = false;

    for caps in FENCE.captures_iter(&escaped) {
        let Some(whole) = caps.get(0) else { continue };
        push_plain(&mut out, &escaped[cursor..whole.start()], after_fence);

        let tag = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("plaintext");
        let body = caps.get(2).map_or("", |m| m.as_str());
        out.push_str("<pre><code class=\"language-");
        out.push_str(tag);
        out.push_str("\">");
        out.push_str(body);
        out.push_str("</code></pre>");

        cursor = whole.end();
        after_fence = true;
    }
    push_plain(&mut out, &escaped[cursor..], after_fence);
    out
}

/// Append a non-fenced segment with newlines converted to `<br>`. When the
/// segment follows a fence, its leading newline stays literal.
fn push_plain(out: &mut String, segment: &str, after_fence: bool) {
    let mut rest = segment;
    if after_fence {
        if let Some(stripped) = rest.strip_prefix('\n') {
            out.push('\n');
            rest = stripped;
        }
    }
    out.push_str(&rest.replace('\n', "<br>"));
}
