use super::tokenizer::{Tokens, Word};
use super::CaseStyle;

/// Re-join tokenized words in the given style.
pub fn join(tokens: &Tokens<'_>, style: CaseStyle) -> String {
    let mut out = String::new();

    for (i, word) in tokens.words.iter().enumerate() {
        if word.dots > 0 {
            out.extend(std::iter::repeat('.').take(word.dots));
            if word.spaced {
                out.push_str(style.separator());
            }
        } else if i > 0 {
            out.push_str(style.separator());
        }

        let segment_start = i == 0 || word.dots > 0;
        write_word(&mut out, word, style, segment_start);
    }

    out.extend(std::iter::repeat('.').take(tokens.trailing_dots));
    out
}

fn write_word(out: &mut String, word: &Word<'_>, style: CaseStyle, segment_start: bool) {
    let pieces = word.pieces();

    match style {
        CaseStyle::Camel | CaseStyle::Pascal => {
            for (j, piece) in pieces.iter().enumerate() {
                if is_digits(piece) {
                    out.push_str(piece);
                } else if style == CaseStyle::Camel && segment_start && j == 0 {
                    out.push_str(&piece.to_lowercase());
                } else {
                    capitalize_into(out, piece);
                }
            }
        }
        CaseStyle::Kebab | CaseStyle::Snake => {
            let separator = style.separator();
            for (j, piece) in pieces.iter().enumerate() {
                if j > 0 {
                    out.push_str(separator);
                }
                out.push_str(&piece.to_lowercase());
            }
        }
        CaseStyle::ScreamingSnake => {
            for (j, piece) in pieces.iter().enumerate() {
                if j > 0 {
                    out.push('_');
                }
                out.push_str(&piece.to_uppercase());
            }
        }
    }
}

fn capitalize_into(out: &mut String, piece: &str) {
    let mut chars = piece.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

// Pieces never mix digits and letters, so the first char decides.
fn is_digits(piece: &str) -> bool {
    piece.chars().next().is_some_and(char::is_numeric)
}
