//! Code block widget: header, numbered highlighted lines and a copy button

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::highlighter::{escape_attr, escape_html, highlight};

#[derive(Debug, Clone)]
pub struct CodeBlock<'a> {
    code: &'a str,
    language: &'a str,
    filename: Option<&'a str>,
    line_numbers: bool,
    highlight_lines: BTreeSet<usize>,
}

impl<'a> CodeBlock<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            language: "rift",
            filename: None,
            line_numbers: true,
            highlight_lines: BTreeSet::new(),
        }
    }

    /// Display tag only; the RIFT rules are applied regardless.
    pub fn language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }

    pub fn filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// 1-based line numbers to emphasise.
    pub fn highlight_lines<I: IntoIterator<Item = usize>>(mut self, lines: I) -> Self {
        self.highlight_lines.extend(lines);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<div class=\"code-block\">");

        if self.filename.is_some() || !self.language.is_empty() {
            out.push_str("<div class=\"code-header\"><div class=\"dots\">");
            out.push_str("<span class=\"dot red\"></span><span class=\"dot orange\"></span><span class=\"dot green\"></span></div>");
            if let Some(filename) = self.filename {
                let _ = write!(out, "<span class=\"filename\">{}</span>", escape_html(filename));
            }
            let _ = write!(out, "<span class=\"language\">{}</span>", escape_html(self.language));
            out.push_str("</div>");
        }

        out.push_str("<div class=\"code-body\"><pre><code>");
        for (index, line) in highlight(self.code).iter().enumerate() {
            let number = index + 1;
            if self.highlight_lines.contains(&number) {
                out.push_str("<div class=\"line hl\">");
            } else {
                out.push_str("<div class=\"line\">");
            }
            if self.line_numbers {
                let _ = write!(out, "<span class=\"ln\">{}</span>", number);
            }
            let _ = write!(out, "<span class=\"src\">{}</span></div>", line);
        }
        out.push_str("</code></pre>");

        let _ = write!(
            out,
            "<button class=\"copy\" type=\"button\" aria-label=\"Copy code\" data-copy=\"{}\">Copy</button>",
            escape_attr(self.code)
        );
        out.push_str("</div></div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_numbers_and_copy_payload() {
        let html = CodeBlock::new("let a = \"x\"\nprint(a)")
            .filename("hello.rift")
            .render();

        assert!(html.contains("<span class=\"filename\">hello.rift</span>"));
        assert!(html.contains("<span class=\"language\">rift</span>"));
        assert!(html.contains("<span class=\"ln\">1</span>"));
        assert!(html.contains("<span class=\"ln\">2</span>"));
        assert!(html.contains("data-copy=\"let a = &quot;x&quot;\nprint(a)\""));
    }

    #[test]
    fn header_is_omitted_without_language_or_filename() {
        let html = CodeBlock::new("rift --version").language("").render();
        assert!(!html.contains("code-header"));
    }

    #[test]
    fn line_numbers_can_be_disabled() {
        let html = CodeBlock::new("a\nb").line_numbers(false).render();
        assert!(!html.contains("class=\"ln\""));
        assert_eq!(html.matches("<div class=\"line\">").count(), 2);
    }

    #[test]
    fn highlighted_rows_get_marked() {
        let html = CodeBlock::new("a\nb\nc").highlight_lines([2]).render();
        assert_eq!(html.matches("<div class=\"line hl\">").count(), 1);
        assert!(html.contains("<div class=\"line hl\"><span class=\"ln\">2</span>"));
    }

    #[test]
    fn source_is_highlighted_and_escaped() {
        let html = CodeBlock::new("give <b>").language("bash").render();
        assert!(html.contains("<span style=\"color:#bb9af7\">give</span> &lt;b&gt;"));
        assert!(html.contains("<span class=\"language\">bash</span>"));
    }
}
