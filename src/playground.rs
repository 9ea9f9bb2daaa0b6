//! Playground "Run" preview
//!
//! This is a canned simulation, not an interpreter: it looks for `print(...)`
//! calls, echoes string literal arguments, stands in placeholders for anything
//! else and appends fixed lines when the sample starts a server. Nothing in the
//! source is evaluated.

use std::borrow::Cow;

use crate::lexer::is_word_char;

pub const NO_OUTPUT: &str = "✓ Code executed successfully (no output)";
pub const SERVER_STARTED: &str = "✓ Server started on http://localhost:8080";
pub const SERVER_HINT: &str = "  Press Ctrl+C to stop";
pub const TEMPLATE_OUTPUT: &str = "[Template output]";

const PRINT_CALL: &str = "print(";
pub const SERVE_CALL: &str = "http.serve";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// A backtick template; interpolation is never resolved.
    Template,
    /// Any other argument, shown verbatim in brackets.
    Expression(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Literal(String),
    Placeholder(Placeholder),
    Separator,
    Appendix(&'static str),
}

impl OutputLine {
    pub fn kind(&self) -> &'static str {
        match self {
            OutputLine::Literal(_) => "literal",
            OutputLine::Placeholder(_) => "placeholder",
            OutputLine::Separator => "separator",
            OutputLine::Appendix(_) => "appendix",
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        match self {
            OutputLine::Literal(text) => Cow::Borrowed(text.as_str()),
            OutputLine::Placeholder(Placeholder::Template) => Cow::Borrowed(TEMPLATE_OUTPUT),
            OutputLine::Placeholder(Placeholder::Expression(expr)) => {
                Cow::Owned(format!("[{}]", expr))
            }
            OutputLine::Separator => Cow::Borrowed(""),
            OutputLine::Appendix(text) => Cow::Borrowed(*text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Simulation {
    pub lines: Vec<OutputLine>,
}

impl Simulation {
    pub fn has_output(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Every line followed by `\n`, or the fixed no-output line.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return format!("{}\n", NO_OUTPUT);
        }

        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }
}

pub fn simulate(source: &str) -> Simulation {
    let mut lines: Vec<OutputLine> = print_arguments(source)
        .into_iter()
        .map(classify)
        .collect();

    if source.contains(SERVE_CALL) {
        lines.push(OutputLine::Separator);
        lines.push(OutputLine::Appendix(SERVER_STARTED));
        lines.push(OutputLine::Appendix(SERVER_HINT));
    }

    Simulation { lines }
}

/// Trimmed arguments of every closed, non-empty `print(...)` call, in source order.
///
/// One left-to-right pass. Quotes and nested parentheses only count while a
/// call is open. A call nested inside another closed call is part of the
/// outer argument; inside a call that never closes it stands on its own.
fn print_arguments(source: &str) -> Vec<&str> {
    // One entry per open parenthesis; `print(` itself carries its offsets.
    let mut stack: Vec<Option<(usize, usize)>> = Vec::new();
    let mut closed: Vec<(usize, usize, usize)> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;
    let mut skip_to = 0;

    for (i, c) in source.char_indices() {
        if i < skip_to {
            prev = Some(c);
            continue;
        }

        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            prev = Some(c);
            continue;
        }

        // `reprint(` is somebody else's function.
        if c == 'p' && source[i..].starts_with(PRINT_CALL) && !prev.is_some_and(is_word_char) {
            let open = i + PRINT_CALL.len();
            stack.push(Some((i, open)));
            skip_to = open;
            prev = Some(c);
            continue;
        }

        if !stack.is_empty() {
            match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' => stack.push(None),
                ')' => {
                    if let Some(Some((at, open))) = stack.pop() {
                        closed.push((at, open, i));
                    }
                }
                _ => {}
            }
        }
        prev = Some(c);
    }

    // Calls close innermost first; keep only the outermost of each nest.
    closed.sort_unstable_by_key(|&(at, _, _)| at);
    let mut args = Vec::new();
    let mut covered_to = 0;
    for (at, open, close) in closed {
        if at < covered_to {
            continue;
        }
        covered_to = close + 1;
        let arg = source[open..close].trim();
        if !arg.is_empty() {
            args.push(arg);
        }
    }

    args
}

fn classify(arg: &str) -> OutputLine {
    if let Some(body) = single_literal(arg, '"').or_else(|| single_literal(arg, '\'')) {
        return OutputLine::Literal(unescape(body));
    }

    if arg.len() >= 2 && arg.starts_with('`') && arg.ends_with('`') {
        return OutputLine::Placeholder(Placeholder::Template);
    }

    OutputLine::Placeholder(Placeholder::Expression(arg.to_string()))
}

/// The body of `arg` when it is exactly one `quote`-delimited literal.
fn single_literal(arg: &str, quote: char) -> Option<&str> {
    let body = arg.strip_prefix(quote)?;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            let closed_at = i + c.len_utf8();
            return (closed_at == body.len()).then(|| &body[..i]);
        }
    }

    None
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        assert_eq!(simulate(r#"print("Hello, World!")"#).render(), "Hello, World!\n");
    }

    #[test]
    fn single_quotes_work_too() {
        assert_eq!(simulate("print('hi')").render(), "hi\n");
    }

    #[test]
    fn no_prints_gives_fixed_line() {
        let sim = simulate("let x = 1\nx = x + 1");
        assert!(!sim.has_output());
        assert_eq!(sim.render(), "✓ Code executed successfully (no output)\n");
        assert_eq!(simulate("").render(), "✓ Code executed successfully (no output)\n");
    }

    #[test]
    fn literal_then_template_in_source_order() {
        let source = "# Hello World in RIFT\nlet name = \"World\"\nprint(\"start\")\nprint(`Hello, $@name#!`)";
        let sim = simulate(source);
        assert_eq!(
            sim.lines,
            vec![
                OutputLine::Literal("start".to_string()),
                OutputLine::Placeholder(Placeholder::Template),
            ]
        );
        assert_eq!(sim.render(), "start\n[Template output]\n");
    }

    #[test]
    fn expressions_become_bracketed_placeholders() {
        let sim = simulate("print(describeNumber(0))\nprint( dog.speak() )");
        assert_eq!(sim.render(), "[describeNumber(0)]\n[dog.speak()]\n");
    }

    #[test]
    fn concatenation_is_not_a_literal() {
        let sim = simulate(r#"print("a" + b)"#);
        assert_eq!(
            sim.lines,
            vec![OutputLine::Placeholder(Placeholder::Expression(r#""a" + b"#.to_string()))]
        );
    }

    #[test]
    fn parens_and_escapes_inside_literals() {
        assert_eq!(simulate(r#"print("(x) \"q\"")"#).render(), "(x) \"q\"\n");
        assert_eq!(simulate(r#"print("\nProcessing...")"#).render(), "\nProcessing...\n");
        assert_eq!(simulate(r#"print("C:\dir")"#).render(), "C:\\dir\n");
    }

    #[test]
    fn server_lines_come_last() {
        let source = "print(\"Server running on http://localhost:8080\")\nhttp.serve(8080)\nprint(\"after\")";
        let out = simulate(source).render();
        assert_eq!(
            out,
            "Server running on http://localhost:8080\nafter\n\n✓ Server started on http://localhost:8080\n  Press Ctrl+C to stop\n"
        );
        assert!(out.ends_with("✓ Server started on http://localhost:8080\n  Press Ctrl+C to stop\n"));
    }

    #[test]
    fn server_only_source() {
        let sim = simulate("http.serve(8080)");
        assert!(sim.has_output());
        assert_eq!(
            sim.render(),
            "\n✓ Server started on http://localhost:8080\n  Press Ctrl+C to stop\n"
        );
    }

    #[test]
    fn unclosed_empty_and_foreign_calls_are_ignored() {
        assert!(simulate("print(\"oops\"").lines.is_empty());
        assert!(simulate("print()").lines.is_empty());
        assert!(simulate("reprint(\"x\")").lines.is_empty());
        assert_eq!(
            simulate("logger.print(\"x\")").lines,
            vec![OutputLine::Literal("x".to_string())]
        );
    }

    #[test]
    fn nested_calls_inside_an_unclosed_call_still_count() {
        assert_eq!(simulate("print( print(\"x\")").render(), "x\n");
        assert_eq!(simulate("print(print(\"x\"))").render(), "[print(\"x\")]\n");
    }

    #[test]
    fn many_unclosed_calls_stay_linear() {
        let source = PRINT_CALL.repeat(100_000);
        let started = std::time::Instant::now();
        let sim = simulate(&source);
        assert!(sim.lines.is_empty());
        assert!(started.elapsed() < std::time::Duration::from_secs(2));

        let mixed = format!("{}print(\"done\")", "print( 'a' ".repeat(50_000));
        assert_eq!(simulate(&mixed).render(), "done\n");
    }

    #[test]
    fn output_line_kinds() {
        assert_eq!(OutputLine::Literal(String::new()).kind(), "literal");
        assert_eq!(OutputLine::Placeholder(Placeholder::Template).kind(), "placeholder");
        assert_eq!(OutputLine::Separator.kind(), "separator");
        assert_eq!(OutputLine::Appendix(SERVER_HINT).kind(), "appendix");
    }
}
