//! RIFT highlighting lexer - splits one line of source into categorised spans
//! A single left-to-right pass; every character lands in exactly one token

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::token::{Category, Token};

pub static KEYWORD_LIST: &[&str] = &[
    "let", "mut", "const", "conduit", "make", "build", "extend", "me", "parent", "static", "get",
    "set", "if", "else", "while", "repeat", "check", "when", "stop", "next", "give", "yield",
    "grab", "share", "as", "try", "catch", "finally", "fail", "async", "wait", "and", "or", "not",
    "in", "yes", "no", "none",
];

pub static TYPE_LIST: &[&str] = &["num", "text", "bool", "list", "map"];

/// Longest first, so `...` wins over `..`.
pub static OPERATORS: &[&str] = &["...", "-!", "~!", "=!", "?.", "?~", "??", "::", ".."];

pub static DELIMITERS: &[char] = &['@', '#', '~', '!'];

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = KEYWORD_LIST.iter().copied().collect();
    static ref TYPES: HashSet<&'static str> = TYPE_LIST.iter().copied().collect();
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub struct Lexer<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    tokens: Vec<Token<'a>>,
    /// No `*/` occurs at or after this byte.
    block_unclosed_from: Option<usize>,
    /// Per quote (`'`, `"`, `` ` ``): no closing quote follows an opener at or after this byte.
    string_unclosed_from: [Option<usize>; 3],
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            source: line,
            start: 0,
            current: 0,
            tokens: Vec::new(),
            block_unclosed_from: None,
            string_unclosed_from: [None; 3],
        }
    }

    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        while !self.is_at_end() {
            self.start = self.current;
            let category = self.scan_token();
            self.push(category);
        }
        self.tokens
    }

    fn scan_token(&mut self) -> Category {
        let c = match self.advance() {
            Some(c) => c,
            None => return Category::Plain,
        };

        match c {
            '#' if self.peek().is_some_and(|next| next != '@') => self.line_comment(),
            '/' if self.peek() == Some('*') => self.block_comment(),
            '\'' | '"' | '`' => self.string(c),
            c if is_word_char(c) => self.word(),
            _ => self.symbol(c),
        }
    }

    fn line_comment(&mut self) -> Category {
        // A trailing `\r` from CRLF input is not part of the comment.
        self.current = self.source.len() - usize::from(self.source.ends_with('\r'));
        Category::Comment
    }

    fn block_comment(&mut self) -> Category {
        // Skip the `*` so `/*/` does not close itself.
        let body = self.current + 1;
        if self.block_unclosed_from.is_some_and(|from| body >= from) {
            return Category::Plain;
        }

        match self.source[body..].find("*/") {
            Some(end) => {
                self.current = body + end + 2;
                Category::Comment
            }
            None => {
                self.block_unclosed_from = Some(body);
                Category::Plain
            }
        }
    }

    fn string(&mut self, quote: char) -> Category {
        let opening_end = self.current;
        let slot = match quote {
            '\'' => 0,
            '"' => 1,
            _ => 2,
        };
        // A later opener of the same quote is either escaped-aligned the same
        // way or was consumed as `\q`, so it cannot close either.
        if self.string_unclosed_from[slot].is_some_and(|from| opening_end >= from) {
            return Category::Plain;
        }

        loop {
            match self.advance() {
                Some('\\') => {
                    if self.advance().is_none() {
                        break;
                    }
                }
                Some(c) if c == quote => return Category::String,
                Some(_) => {}
                None => break,
            }
        }

        // Unterminated: only the quote itself is consumed, as plain text.
        self.string_unclosed_from[slot] = Some(opening_end);
        self.current = opening_end;
        Category::Plain
    }

    fn word(&mut self) -> Category {
        while self.peek().is_some_and(is_word_char) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        if KEYWORDS.contains(text) {
            Category::Keyword
        } else if TYPES.contains(text) {
            Category::Type
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            self.fraction();
            Category::Number
        } else {
            Category::Plain
        }
    }

    fn fraction(&mut self) {
        if self.peek() != Some('.') || !self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            return;
        }

        let saved = self.current;
        self.advance();
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // `1.5abc` has no word boundary after the fraction.
        if self.peek().is_some_and(is_word_char) {
            self.current = saved;
        }
    }

    fn symbol(&mut self, c: char) -> Category {
        let rest = &self.source[self.start..];
        if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            self.current = self.start + op.len();
            return Category::Operator;
        }

        if DELIMITERS.contains(&c) {
            Category::Delimiter
        } else {
            Category::Plain
        }
    }

    fn push(&mut self, category: Category) {
        if category == Category::Plain {
            if let Some(last) = self.tokens.last_mut() {
                if last.category == Category::Plain {
                    let merged_start = self.start - last.text.len();
                    last.text = &self.source[merged_start..self.current];
                    return;
                }
            }
        }

        let text = &self.source[self.start..self.current];
        self.tokens.push(Token::new(category, text));
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Tokenises one line.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    Lexer::new(line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(line: &str) -> Vec<(Category, &str)> {
        tokenize(line)
            .into_iter()
            .map(|t| (t.category, t.text))
            .collect()
    }

    #[test]
    fn tokens_concatenate_back_to_input() {
        let line = r#"let user = @name: "Alice", age: 30# ?? none  # trailing"#;
        let joined: String = tokenize(line).iter().map(|t| t.text).collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn keywords_types_and_identifiers() {
        assert_eq!(
            categories("let name: text"),
            vec![
                (Category::Keyword, "let"),
                (Category::Plain, " name: "),
                (Category::Type, "text"),
            ]
        );
        // Keyword prefixes inside longer identifiers stay plain.
        assert_eq!(categories("letter"), vec![(Category::Plain, "letter")]);
        assert_eq!(
            categories("me.name"),
            vec![(Category::Keyword, "me"), (Category::Plain, ".name")]
        );
    }

    #[test]
    fn hash_comment_runs_to_end_of_line() {
        assert_eq!(
            categories("# Hello World in RIFT"),
            vec![(Category::Comment, "# Hello World in RIFT")]
        );
        assert_eq!(
            categories("let x = 1  # let"),
            vec![
                (Category::Keyword, "let"),
                (Category::Plain, " x = "),
                (Category::Number, "1"),
                (Category::Plain, "  "),
                (Category::Comment, "# let"),
            ]
        );
    }

    #[test]
    fn hash_before_at_or_at_end_is_a_delimiter() {
        assert_eq!(
            categories("#@"),
            vec![(Category::Delimiter, "#"), (Category::Delimiter, "@")]
        );
        assert_eq!(
            categories("x#"),
            vec![(Category::Plain, "x"), (Category::Delimiter, "#")]
        );
    }

    #[test]
    fn block_comment_on_one_line() {
        assert_eq!(
            categories("a /* note */ b"),
            vec![
                (Category::Plain, "a "),
                (Category::Comment, "/* note */"),
                (Category::Plain, " b"),
            ]
        );
        assert_eq!(categories("/* open"), vec![(Category::Plain, "/* open")]);
    }

    #[test]
    fn strings_win_over_comments_inside_them() {
        assert_eq!(
            categories(r#"print("a # b")"#),
            vec![
                (Category::Plain, "print("),
                (Category::String, r#""a # b""#),
                (Category::Plain, ")"),
            ]
        );
    }

    #[test]
    fn template_string_keeps_interpolation_markers() {
        assert_eq!(
            categories("`Hello, $@name#!`"),
            vec![(Category::String, "`Hello, $@name#!`")]
        );
    }

    #[test]
    fn escaped_quotes_stay_inside_the_string() {
        assert_eq!(
            categories(r#""say \"hi\"" x"#),
            vec![
                (Category::String, r#""say \"hi\"""#),
                (Category::Plain, " x"),
            ]
        );
    }

    #[test]
    fn unterminated_quote_is_plain() {
        assert_eq!(
            categories("'open let"),
            vec![(Category::Plain, "'open "), (Category::Keyword, "let")]
        );
    }

    #[test]
    fn numbers_need_word_boundaries() {
        assert_eq!(categories("3.14"), vec![(Category::Number, "3.14")]);
        assert_eq!(categories("123abc"), vec![(Category::Plain, "123abc")]);
        assert_eq!(
            categories("1..10"),
            vec![
                (Category::Number, "1"),
                (Category::Operator, ".."),
                (Category::Number, "10"),
            ]
        );
        assert_eq!(
            categories("5."),
            vec![(Category::Number, "5"), (Category::Plain, ".")]
        );
    }

    #[test]
    fn operators_use_longest_match() {
        assert_eq!(categories("...xs"), vec![(Category::Operator, "..."), (Category::Plain, "xs")]);
        assert_eq!(
            categories("a ?? b"),
            vec![
                (Category::Plain, "a "),
                (Category::Operator, "??"),
                (Category::Plain, " b"),
            ]
        );
        assert_eq!(categories("~!"), vec![(Category::Operator, "~!")]);
    }

    #[test]
    fn single_delimiters() {
        assert_eq!(
            categories("~1!"),
            vec![
                (Category::Delimiter, "~"),
                (Category::Number, "1"),
                (Category::Delimiter, "!"),
            ]
        );
    }

    #[test]
    fn non_ascii_text_is_plain() {
        let line = "let café = \"☕\"";
        let tokens = tokenize(line);
        assert_eq!(tokens[0], Token::new(Category::Keyword, "let"));
        assert_eq!(tokens.last().map(|t| t.category), Some(Category::String));
    }

    #[test]
    fn carriage_return_stays_out_of_comments() {
        assert_eq!(
            categories("# note\r"),
            vec![(Category::Comment, "# note"), (Category::Plain, "\r")]
        );
        assert_eq!(
            categories("x #\r"),
            vec![
                (Category::Plain, "x "),
                (Category::Comment, "#"),
                (Category::Plain, "\r"),
            ]
        );
    }

    #[test]
    fn unclosed_block_openers_stay_plain() {
        assert_eq!(categories("/* a /* b"), vec![(Category::Plain, "/* a /* b")]);
        assert_eq!(
            categories("/* a /* b */"),
            vec![(Category::Comment, "/* a /* b */")]
        );
        assert_eq!(
            categories("/ * /* x */"),
            vec![(Category::Plain, "/ * "), (Category::Comment, "/* x */")]
        );
    }

    #[test]
    fn repeated_unclosed_openers_stay_linear() {
        let started = std::time::Instant::now();

        let line = "/* ".repeat(100_000);
        assert_eq!(tokenize(&line), vec![Token::new(Category::Plain, line.as_str())]);

        let line = "'\\".repeat(100_000);
        let tokens = tokenize(&line);
        assert!(tokens.iter().all(|t| t.category == Category::Plain));

        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn later_string_still_closes_after_an_unterminated_one() {
        assert_eq!(
            categories("\"a 'b' c"),
            vec![
                (Category::Plain, "\"a "),
                (Category::String, "'b'"),
                (Category::Plain, " c"),
            ]
        );
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
