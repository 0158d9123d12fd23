// File: src/label.rs
// Purpose: Best-effort capitalization of field labels

use regex::Captures;

use crate::pattern::Pattern;

// ASCII word-character runs. Word boundaries are ASCII only, so a letter
// next to `é` or `ل` still starts or ends a word.
static WORD_RUN: Pattern = Pattern::new(r"[A-Za-z0-9_]+");

/// Capitalize every ASCII word: first letter upper case, the rest lower case.
///
/// A word is a run of ASCII word characters made only of letters, so
/// `tax_number` and `abc1` are left alone.
///
/// Never fails; if the word pattern is unusable the label comes back as is.
///
/// ```
/// assert_eq!(rusty_rules::capitalize("first NAME"), "First Name");
/// ```
pub fn capitalize(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }

    let regex = match WORD_RUN.regex() {
        Ok(regex) => regex,
        Err(fault) => {
            tracing::error!(error = ?fault, label, "could not capitalize label");
            return label.to_string();
        }
    };

    regex
        .replace_all(label, |caps: &Captures| {
            // runs are ASCII, byte slicing is safe
            let word = &caps[0];
            if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
                return word.to_string();
            }
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..1].to_ascii_uppercase());
            out.push_str(&word[1..].to_ascii_lowercase());
            out
        })
        .into_owned()
}
