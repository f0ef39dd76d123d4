use crate::core::{Match, Player};
use crate::ranking::NameMatcher;

const SELF_REFERENCE: [char; 3] = ['y', 'o', 'u'];

/// Replace every whole-word, case-insensitive "you" with `name`.
///
/// Word boundaries are non-letters or the string edges, so "yours" and
/// "Yolanda" are left alone. Single pass: a replacement name containing
/// "you" is never rescanned.
pub fn substitute_you(text: &str, name: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if is_self_reference_at(&chars, i) {
            out.push_str(name);
            i += SELF_REFERENCE.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn is_self_reference_at(chars: &[char], i: usize) -> bool {
    let end = i + SELF_REFERENCE.len();
    if end > chars.len() {
        return false;
    }

    let word_matches = chars[i..end]
        .iter()
        .zip(SELF_REFERENCE)
        .all(|(c, expected)| c.to_lowercase().eq(std::iter::once(expected)));
    if !word_matches {
        return false;
    }

    let starts_word = i == 0 || !chars[i - 1].is_alphabetic();
    let ends_word = chars.get(end).map_or(true, |c| !c.is_alphabetic());
    starts_word && ends_word
}

/// Split a line into letter-only tokens; digits, punctuation and symbols
/// are separators
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Recognized text after "you" substitution, lowercased and tokenized per
/// line. Blank lines keep their slot so line indices match the raw text.
#[derive(Debug, Clone, Default)]
pub struct RecognizedText {
    lines: Vec<Vec<String>>,
}

impl RecognizedText {
    pub fn parse(raw: &str, uploader_name: Option<&str>) -> Self {
        let text = match uploader_name {
            Some(name) => substitute_you(raw, name),
            None => raw.to_string(),
        };

        let lines = text
            .to_lowercase()
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    Vec::new()
                } else {
                    tokenize(line).into_iter().map(str::to_string).collect()
                }
            })
            .collect();

        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the first line with a token equal to, or matching, `token`
    pub fn first_line_matching(&self, token: &str, matcher: &dyn NameMatcher) -> Option<usize> {
        if token.is_empty() {
            return None;
        }

        self.lines.iter().position(|words| {
            words
                .iter()
                .any(|word| word == token || matcher.is_match(word, token))
        })
    }
}

/// Earliest matching line for every roster player that appears at all,
/// in roster order
pub fn find_matches(
    roster: &[Player],
    text: &RecognizedText,
    matcher: &dyn NameMatcher,
) -> Vec<Match> {
    roster
        .iter()
        .filter_map(|player| {
            let token = player.first_name_token();
            let found = text.first_line_matching(&token, matcher);
            tracing::trace!(player = %player.name, token = %token, line = ?found, "name scan");
            found.map(|line_index| Match::new(player.clone(), line_index))
        })
        .collect()
}
