//! RFC 5545 text escaping and line folding.

/// Maximum characters on a physical content line before folding.
pub const FOLD_LIMIT: usize = 75;

/// Escape a TEXT value: backslash first, then newline, comma and semicolon.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Reverse [`escape_text`].
///
/// `\n` and `\N` become a newline; any other escaped character stands for
/// itself.
pub fn unescape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}

/// Fold one logical content line.
///
/// Counts characters, not octets: the first physical line holds
/// `FOLD_LIMIT` characters and every continuation is one space followed by
/// up to `FOLD_LIMIT` characters, joined by CRLF.
pub fn fold_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= FOLD_LIMIT {
        return line.to_string();
    }

    chars
        .chunks(FOLD_LIMIT)
        .enumerate()
        .map(|(i, chunk)| {
            let chunk: String = chunk.iter().collect();
            if i == 0 { chunk } else { format!(" {chunk}") }
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Join folded continuation lines back into logical lines.
pub fn unfold(ics: &str) -> String {
    ics.replace("\r\n ", "")
}
