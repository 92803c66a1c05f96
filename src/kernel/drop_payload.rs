//! Terminals deliver a file dropped onto them as pasted text: one or more paths, shell-quoted
//! or escaped depending on the emulator, sometimes as `file://` URIs.

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

/// How a backslash in the pasted text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    /// POSIX shell style: `\` escapes whitespace, quotes and itself; single and double quotes
    /// group.
    Shell,
    /// Windows style: backslashes are path separators; only double quotes group.
    Windows,
}

const PLATFORM_QUOTING: Quoting = if cfg!(windows) {
    Quoting::Windows
} else {
    Quoting::Shell
};

pub fn parse_drop_payload(text: &str) -> Vec<PathBuf> {
    parse_with(text, PLATFORM_QUOTING)
}

fn parse_with(text: &str, quoting: Quoting) -> Vec<PathBuf> {
    split_words(text, quoting)
        .into_iter()
        .filter_map(|word| word_to_path(&word))
        .collect()
}

fn word_to_path(word: &str) -> Option<PathBuf> {
    if word.is_empty() {
        return None;
    }
    let Some(rest) = word.strip_prefix("file://") else {
        return Some(PathBuf::from(word));
    };
    // `file:///x` has an empty host, `file://localhost/x` a named one.
    let path = match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => return None,
    };
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    Some(PathBuf::from(decoded.as_ref()))
}

fn is_shell_escapable(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\\' | '\'' | '"')
}

fn split_words(text: &str, quoting: Quoting) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' if quoting == Quoting::Shell => {
                in_word = true;
                for c in chars.by_ref() {
                    if c == '\'' {
                        break;
                    }
                    current.push(c);
                }
            }
            '"' => {
                in_word = true;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' if quoting == Quoting::Shell
                            && matches!(chars.peek(), Some('"' | '\\')) =>
                        {
                            if let Some(next) = chars.next() {
                                current.push(next);
                            }
                        }
                        _ => current.push(c),
                    }
                }
            }
            // A backslash before an ordinary character is kept, so `C:\dir` survives.
            '\\' if quoting == Quoting::Shell
                && chars.peek().is_some_and(|&next| is_shell_escapable(next)) =>
            {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/drop_payload.rs"]
mod tests;
