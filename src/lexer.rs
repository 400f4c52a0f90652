/// Split `raw` into argument tokens.
///
/// Whitespace separates tokens, `"..."` spans are copied verbatim (a doubled
/// `""` stands for one quote), and `/* */` and `//` comments are dropped.
/// Unterminated quotes and comments end silently at end of input.
pub fn tokenize(raw: &str) -> Vec<String> {
    Lexer::new(raw).run()
}

struct Lexer<'a> {
    s: &'a str,
    i: usize,
    buf: String,
    out: Vec<String>,
}

impl<'a> Lexer<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            buf: String::new(),
            out: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<String> {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.flush();
                self.bump(c);
                continue;
            }
            if c == '"' {
                self.bump(c);
                self.quoted_span();
                continue;
            }
            if self.peek_str("/*") {
                self.flush();
                self.skip_block_comment();
                continue;
            }
            if self.peek_str("//") {
                self.flush();
                self.skip_line_comment();
                continue;
            }
            self.buf.push(c);
            self.bump(c);
        }
        self.flush();
        self.out
    }

    /// Called just past the opening quote.
    fn quoted_span(&mut self) {
        while let Some(c) = self.peek_char() {
            self.bump(c);
            if c != '"' {
                self.buf.push(c);
                continue;
            }
            if self.peek_char() == Some('"') {
                self.buf.push('"');
                self.bump('"');
                continue;
            }
            return;
        }
    }

    fn skip_block_comment(&mut self) {
        let body = self.i + 2;
        self.i = match self.s[body..].find("*/") {
            Some(end) => body + end + 2,
            None => self.s.len(),
        };
    }

    // The terminator itself is left for the main loop.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char() {
            if matches!(c, '\n' | '\r' | '\0') {
                break;
            }
            self.bump(c);
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.out.push(std::mem::take(&mut self.buf));
        }
    }

    fn bump(&mut self, c: char) {
        self.i += c.len_utf8();
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn peek_str(&self, lit: &str) -> bool {
        self.s[self.i..].starts_with(lit)
    }
}
