use super::*;

// =============================================================
// Escaping
// =============================================================

#[test]
fn escape_handles_all_specials() {
    assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
}

#[test]
fn escape_ampersand_is_not_double_escaped() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn escaped_output_has_no_raw_specials() {
    let samples = ["<>&", "&&&", "x<y>z&w", "if (a<b && b>c) {}", "&<>&<>"];
    for sample in samples {
        let escaped = escape_html(sample);
        assert!(!escaped.contains('<'), "raw < in {escaped:?}");
        assert!(!escaped.contains('>'), "raw > in {escaped:?}");
        for (i, _) in escaped.match_indices('&') {
            let tail = &escaped[i..];
            assert!(
                tail.starts_with("&amp;") || tail.starts_with("&lt;") || tail.starts_with("&gt;"),
                "bare & in {escaped:?}"
            );
        }
    }
}

// =============================================================
// Fenced code blocks
// =============================================================

#[test]
fn tagged_fence_becomes_language_code_block() {
    let reply = "Use this:\n```python\nprint(1)\n```\nDone";
    let html = format_reply(reply);
    assert_eq!(
        html,
        "Use this:<br><pre><code class=\"language-python\">print(1)\n</code></pre>\nDone"
    );
}

#[test]
fn untagged_fence_defaults_to_plaintext() {
    let html = format_reply("```\nsome text\n```");
    assert!(html.contains("<pre><code class=\"language-plaintext\">some text\n</code></pre>"));
}

#[test]
fn fence_content_is_escaped_but_keeps_newlines() {
    let html = format_reply("```java\nif (a < b) {\n  run();\n}\n```");
    assert!(html.contains("language-java"));
    assert!(html.contains("if (a &lt; b) {\n  run();\n}\n"));
    assert!(!html.contains("if (a < b)"));
}

#[test]
fn multiple_fences_each_get_a_block() {
    let html = format_reply("```js\na\n```\nmiddle\n```js\nb\n```");
    assert_eq!(html.matches("<pre><code").count(), 2);
    assert!(html.contains("\nmiddle<br>"));
}

#[test]
fn unterminated_fence_stays_literal() {
    let html = format_reply("```python\nprint(1)");
    assert_eq!(html, "```python<br>print(1)");
}

// =============================================================
// Newline conversion
// =============================================================

#[test]
fn reply_without_fences_converts_every_newline() {
    assert_eq!(format_reply("one\ntwo\nthree"), "one<br>two<br>three");
}

#[test]
fn no_break_directly_after_closing_pre() {
    let html = format_reply("```js\nx\n```\nafter");
    assert!(html.contains("</code></pre>\nafter"));
    assert!(!html.contains("</code></pre><br>"));
}

#[test]
fn empty_reply_formats_to_empty_string() {
    assert_eq!(format_reply(""), "");
}
