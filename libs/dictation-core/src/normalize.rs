//! Tokenization and text normalization shared by the diff engine and answer validation.

const SENTENCE_FINAL: [char; 3] = ['.', '!', '?'];

const STRIPPED_PUNCTUATION: [char; 15] = [
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}', '-',
];

const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Strip one or more trailing `.`, `!`, `?` characters.
fn strip_sentence_final(text: &str) -> &str {
    text.trim_end_matches(SENTENCE_FINAL)
}

/// Split an answer into words.
///
/// Trims the input, drops sentence-final punctuation and splits on runs of
/// whitespace. Punctuation inside the sentence is kept attached to its word.
pub fn tokenize(text: &str) -> Vec<&str> {
    strip_sentence_final(text.trim()).split_whitespace().collect()
}

/// Lighter normalization used by the judgment classifier: trim, drop
/// sentence-final punctuation, lower-case. No fullwidth folding.
pub fn normalize_for_judgment(text: &str) -> String {
    strip_sentence_final(text.trim()).to_lowercase()
}

fn fold_char(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) {
        // Always lands in the printable ASCII range.
        return char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c);
    }
    match c {
        IDEOGRAPHIC_SPACE => ' ',
        '\u{2019}' => '\'',
        '\u{2013}' | '\u{2014}' => '-',
        '\u{201C}' | '\u{201D}' => '"',
        other => other,
    }
}

/// Canonicalize an answer for exact comparison.
///
/// Folds fullwidth ASCII and the ideographic space to halfwidth, collapses
/// whitespace, straightens curly quotes and dashes, and lower-cases. With
/// `exclude_punctuation` the punctuation class `.,;:!?"'()[]{}-` is removed.
pub fn normalize(text: &str, exclude_punctuation: bool) -> String {
    let mut folded = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.trim().chars().map(fold_char) {
        if c.is_whitespace() {
            if !in_whitespace {
                folded.push(' ');
            }
            in_whitespace = true;
        } else {
            folded.push(c);
            in_whitespace = false;
        }
    }

    let lowered = folded.to_lowercase();
    if exclude_punctuation {
        lowered
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect()
    } else {
        lowered
    }
}

/// Strict boolean check used by auto-judge and first-come modes.
pub fn validate_answer(answer: &str, correct: &str, exclude_punctuation: bool) -> bool {
    normalize(answer, exclude_punctuation) == normalize(correct, exclude_punctuation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Hello world."), vec!["Hello", "world"]);
        assert_eq!(tokenize(""), Vec::<&str>::new());
        assert_eq!(tokenize("a   b"), vec!["a", "b"]);
        assert_eq!(tokenize("  Really?!  "), vec!["Really"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_punctuation() {
        assert_eq!(tokenize("Well, it's fine..."), vec!["Well,", "it's", "fine"]);
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert!(tokenize("?!.").is_empty());
    }

    #[test]
    fn test_normalize_fullwidth() {
        assert_eq!(normalize("Ｈｅｌｌｏ", false), "hello");
        assert_eq!(normalize("ＡＢＣ１２３！", false), "abc123!");
        assert_eq!(normalize("hello　world", false), "hello world");
    }

    #[test]
    fn test_normalize_quotes_and_dashes() {
        assert_eq!(normalize("It\u{2019}s", false), "it's");
        assert_eq!(normalize("well\u{2014}known", false), "well-known");
        assert_eq!(normalize("\u{201C}Hi\u{201D}", false), "\"hi\"");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a \t b\n\nc  ", false), "a b c");
    }

    #[test]
    fn test_normalize_excluding_punctuation() {
        assert_eq!(normalize("It's (really) fine!", true), "its really fine");
        assert_eq!(normalize("ｗｅｌｌ\u{2013}ｋｎｏｗｎ.", true), "wellknown");
    }

    #[test]
    fn test_normalize_fullwidth_sentence_without_punctuation() {
        let input = "  ＨＥＬＬＯ　 ｗｏｒｌｄ！ ";
        assert_eq!(normalize(input, true), "hello world");
    }

    #[test]
    fn test_normalize_for_judgment() {
        assert_eq!(normalize_for_judgment("  Hello World?! "), "hello world");
        assert_eq!(normalize_for_judgment("Ｈｉ"), "ｈｉ");
    }

    #[test]
    fn test_validate_answer() {
        assert!(validate_answer("Ｈｅｌｌｏ", "Hello", false));
        assert!(validate_answer("hello　world", "hello world", false));
        assert!(!validate_answer("hello world", "hello world.", false));
        assert!(validate_answer("hello world", "Hello, world.", true));
        assert!(!validate_answer("helo world", "hello world", true));
    }
}
