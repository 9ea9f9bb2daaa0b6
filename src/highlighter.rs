//! Renders lexer tokens as HTML with inline colour markers

use crate::lexer;
use crate::token::Token;

/// Escapes `&`, `<` and `>`; nothing else.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaping for text placed inside a double- or single-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;").replace('\'', "&#39;")
}

pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.category.style() {
            Some(style) => {
                out.push_str("<span style=\"");
                out.push_str(&style);
                out.push_str("\">");
                out.push_str(&escape_html(token.text));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_html(token.text)),
        }
    }
    out
}

/// Highlights a single line. The line is tokenised once, so markup inserted
/// here is never matched again.
pub fn highlight_line(line: &str) -> String {
    render_tokens(&lexer::tokenize(line))
}

/// Highlights every `\n`-separated line of `source`.
pub fn highlight(source: &str) -> Vec<String> {
    source.split('\n').map(highlight_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drops everything between `<` and `>`; enough for the markup emitted here.
    fn strip_markup(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn escapes_only_three_characters() {
        assert_eq!(escape_html(r#"a < b && c > "d""#), r#"a &lt; b &amp;&amp; c &gt; "d""#);
    }

    #[test]
    fn plain_line_passes_through_escaped() {
        let line = "foo(bar) < baz & qux";
        assert_eq!(highlight_line(line), escape_html(line));
    }

    #[test]
    fn stripping_markup_gives_escaped_input() {
        let lines = [
            "let name = \"World\"",
            "print(`Hello, $@name#!`)",
            "http.get(\"/\", conduit(req) @",
            "    give http.html(200, \"~h1!Welcome to RIFT!~/h1!\")",
            "let results = ~! # a <b> & c",
            "1..10 =! \"small\"",
        ];
        for line in lines {
            assert_eq!(strip_markup(&highlight_line(line)), escape_html(line), "line: {line}");
        }
    }

    #[test]
    fn comment_is_wrapped_once_without_inner_markers() {
        let html = highlight_line("# let x = 1 ?? 2 @");
        assert_eq!(
            html,
            "<span style=\"color:#565f89;font-style:italic\"># let x = 1 ?? 2 @</span>"
        );
    }

    #[test]
    fn keyword_and_string_markers() {
        assert_eq!(
            highlight_line("let s = \"<b>\""),
            "<span style=\"color:#bb9af7\">let</span> s = \
             <span style=\"color:#9ece6a\">\"&lt;b&gt;\"</span>"
        );
    }

    #[test]
    fn delimiters_never_touch_inserted_markup() {
        // The colour attributes contain `#`; a rescanning highlighter would
        // wrap those again.
        let html = highlight_line("let xs = ~1, 2!");
        assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
        assert_eq!(html.matches("<span").count(), 5);
        assert!(!html.contains("color:<span"));
    }

    #[test]
    fn rehighlighting_does_not_double_wrap() {
        let once = highlight_line("let x = 42 # done");
        let twice = highlight_line(&once);
        assert_eq!(strip_markup(&twice), escape_html(&once));
        assert!(!twice.contains("<span style=\"color:#bb9af7\"><span"));
    }

    #[test]
    fn highlight_splits_on_newlines() {
        let lines = highlight("let a = 1\n\n# end");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "");
        assert!(lines[2].contains("font-style:italic"));
    }
}
