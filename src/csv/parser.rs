//! Lenient single-pass CSV tokenization

/// CSV tokenizer for whole-file text
///
/// Scans the input once, honoring quoted fields with doubled-quote escaping
/// and both LF and CRLF line endings. Malformed quoting never fails the parse:
/// an unterminated quote simply runs to end of input and whatever accumulated
/// is kept as the final field. Fields are trimmed of surrounding whitespace
/// after unquoting.
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Tokenize the full text into rows of trimmed fields
    ///
    /// A delimiter or newline inside a quoted field is literal. A CR
    /// immediately followed by LF counts as one line terminator. Rows
    /// consisting of a single empty field (the artifact of a trailing
    /// newline) are dropped.
    pub fn parse_text(&self, text: &str) -> Vec<Vec<String>> {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes && chars.peek() == Some(&quote) {
                    // Escaped quote ("") unescapes to one literal quote
                    field.push(quote);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
                continue;
            }

            if ch == delimiter && !in_quotes {
                row.push(field.trim().to_string());
                field.clear();
                continue;
            }

            if (ch == '\n' || ch == '\r') && !in_quotes {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(field.trim().to_string());
                field.clear();
                rows.push(std::mem::take(&mut row));
                continue;
            }

            field.push(ch);
        }

        // Flush whatever is pending, open quote or not
        row.push(field.trim().to_string());
        rows.push(row);

        rows.retain(|r| !(r.len() == 1 && r[0].is_empty()));
        rows
    }
}
