//! Line Splitting and Tokenizing
//!
//! A line is split on `|` first and each stage is tokenized afterwards, so a
//! quoted `|` still separates stages.

/// Split a line into trimmed pipeline stages.
pub fn split_pipeline(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

/// Split a stage into words.
///
/// Spaces and tabs separate words outside quotes. Inside `'...'` or `"..."`
/// everything is literal up to the matching quote, and the quote characters
/// are dropped. An unterminated quote runs to the end of the stage. Words
/// that end up empty (such as `""`) are dropped.
pub fn tokenize(stage: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in stage.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                ' ' | '\t' => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            },
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
