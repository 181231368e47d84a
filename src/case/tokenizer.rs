use unicode_segmentation::UnicodeSegmentation;

/// A run of alphanumeric graphemes taken from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Number of literal `.` characters right before this word.
    pub dots: usize,
    /// A dropped separator run sat between the last dot and this word.
    pub spaced: bool,
}

impl<'a> Word<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            dots: 0,
            spaced: false,
        }
    }

    /// Split the word into alternating runs of digits and non-digits.
    pub fn pieces(&self) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut prev_numeric = None;

        for (i, grapheme) in self.text.grapheme_indices(true) {
            let numeric = base_char(grapheme).is_numeric();
            if prev_numeric.is_some_and(|p| p != numeric) {
                pieces.push(&self.text[start..i]);
                start = i;
            }
            prev_numeric = Some(numeric);
        }

        if start < self.text.len() {
            pieces.push(&self.text[start..]);
        }

        pieces
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub words: Vec<Word<'a>>,
    pub trailing_dots: usize,
}

impl<'a> Tokens<'a> {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn texts(&self) -> Vec<&'a str> {
        self.words.iter().map(|w| w.text).collect()
    }
}

/// First char of a grapheme cluster; combining marks ride along with it.
pub fn base_char(grapheme: &str) -> char {
    grapheme.chars().next().unwrap_or(' ')
}

/// Split a string into words, keeping dots as structural separators.
pub fn tokenize(s: &str) -> Tokens<'_> {
    tokenize_with(s, true)
}

pub fn tokenize_with(s: &str, preserve_dots: bool) -> Tokens<'_> {
    let mut tokens = Tokens::default();
    let mut current: Option<Word<'_>> = None;
    let mut start = 0;
    let mut pending_dots = 0;
    let mut pending_spaced = false;
    // Inside an uppercase run that began at a hump; each letter is a word.
    let mut hump_run = false;

    let mut graphemes = s.grapheme_indices(true).peekable();
    let mut prev: Option<char> = None;

    while let Some((i, grapheme)) = graphemes.next() {
        let ch = base_char(grapheme);

        if ch.is_alphanumeric() {
            let next = graphemes.peek().map(|&(_, g)| base_char(g));
            let hump = current.is_some() && ch.is_uppercase() && is_hump(prev, next, hump_run);

            if hump {
                if let Some(mut word) = current.take() {
                    word.text = &s[start..i];
                    tokens.words.push(word);
                }
            }

            if current.is_none() {
                start = i;
                current = Some(Word {
                    text: "",
                    dots: std::mem::take(&mut pending_dots),
                    spaced: std::mem::take(&mut pending_spaced),
                });
            }

            hump_run = ch.is_uppercase() && (hump || hump_run);
        } else {
            if let Some(mut word) = current.take() {
                word.text = &s[start..i];
                tokens.words.push(word);
            }

            if ch == '.' && preserve_dots {
                pending_dots += 1;
                pending_spaced = false;
            } else if pending_dots > 0 {
                pending_spaced = true;
            }
            hump_run = false;
        }

        prev = Some(ch);
    }

    if let Some(mut word) = current.take() {
        word.text = &s[start..];
        tokens.words.push(word);
    }
    tokens.trailing_dots = pending_dots;

    tokens
}

// `prev` and `next` surround an uppercase letter inside a word.
fn is_hump(prev: Option<char>, next: Option<char>, hump_run: bool) -> bool {
    match prev {
        Some(p) if p.is_lowercase() || p.is_numeric() => true,
        Some(p) if p.is_uppercase() => hump_run || next.is_some_and(|n| n.is_lowercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_splitting() {
        assert_eq!(tokenize("camelCase").texts(), vec!["camel", "Case"]);
        assert_eq!(tokenize("snake_case").texts(), vec!["snake", "case"]);
        assert_eq!(tokenize("kebab-case").texts(), vec!["kebab", "case"]);
        assert_eq!(tokenize("PascalCase").texts(), vec!["Pascal", "Case"]);
        assert_eq!(
            tokenize("SCREAMING_SNAKE_CASE").texts(),
            vec!["SCREAMING", "SNAKE", "CASE"]
        );
    }

    #[test]
    fn test_digits_stay_in_words() {
        assert_eq!(tokenize("uno2Tres").texts(), vec!["uno2", "Tres"]);
        assert_eq!(tokenize("Nested9Eleven").texts(), vec!["Nested9", "Eleven"]);
        assert_eq!(tokenize("Nested9eleven").texts(), vec!["Nested9eleven"]);
    }

    #[test]
    fn test_acronym_hump() {
        assert_eq!(tokenize("HTTPServer").texts(), vec!["HTTP", "Server"]);
        assert_eq!(tokenize("aBCd").texts(), vec!["a", "B", "Cd"]);
    }

    #[test]
    fn test_uppercase_run_after_hump_splits_per_letter() {
        assert_eq!(tokenize("aBC").texts(), vec!["a", "B", "C"]);
        assert_eq!(tokenize("GetAB").texts(), vec!["Get", "A", "B"]);
        assert_eq!(tokenize("x1YZ").texts(), vec!["x1", "Y", "Z"]);
        assert_eq!(tokenize("abCDEf").texts(), vec!["ab", "C", "D", "Ef"]);
        // a run at the start of a word stays whole
        assert_eq!(tokenize("ABC").texts(), vec!["ABC"]);
        assert_eq!(tokenize("get_ABC").texts(), vec!["get", "ABC"]);
    }

    #[test]
    fn test_combining_marks_stay_in_words() {
        assert_eq!(
            tokenize("i\u{307}stanbul_city").texts(),
            vec!["i\u{307}stanbul", "city"]
        );
        assert_eq!(tokenize("cafe\u{301}Bar").texts(), vec!["cafe\u{301}", "Bar"]);
        assert_eq!(Word::new("x\u{301}2").pieces(), vec!["x\u{301}", "2"]);
    }

    #[test]
    fn test_boundaries_are_dropped() {
        assert_eq!(tokenize("__hello_there_").texts(), vec!["hello", "there"]);
        assert_eq!(tokenize("--hello--there--").texts(), vec!["hello", "there"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("_-_ ").is_empty());
    }

    #[test]
    fn test_dots_are_recorded() {
        let tokens = tokenize("nested.field_obj");
        assert_eq!(tokens.texts(), vec!["nested", "field", "obj"]);
        assert_eq!(tokens.words[0].dots, 0);
        assert_eq!(tokens.words[1].dots, 1);
        assert_eq!(tokens.words[2].dots, 0);

        let tokens = tokenize("Monkey D. Luffy");
        assert_eq!(tokens.texts(), vec!["Monkey", "D", "Luffy"]);
        assert_eq!(tokens.words[2].dots, 1);
        assert!(tokens.words[2].spaced);
        assert!(!tokens.words[1].spaced);

        let tokens = tokenize(".a..b.");
        assert_eq!(tokens.words[0].dots, 1);
        assert_eq!(tokens.words[1].dots, 2);
        assert_eq!(tokens.trailing_dots, 1);
    }

    #[test]
    fn test_dots_as_plain_separators() {
        let tokens = tokenize_with("Monkey D. Luffy", false);
        assert_eq!(tokens.texts(), vec!["Monkey", "D", "Luffy"]);
        assert!(tokens.words.iter().all(|w| w.dots == 0 && !w.spaced));
        assert_eq!(tokens.trailing_dots, 0);
    }

    #[test]
    fn test_pieces() {
        assert_eq!(Word::new("nested9eleven").pieces(), vec!["nested", "9", "eleven"]);
        assert_eq!(Word::new("field2").pieces(), vec!["field", "2"]);
        assert_eq!(Word::new("42").pieces(), vec!["42"]);
        assert!(Word::new("").pieces().is_empty());
    }
}
