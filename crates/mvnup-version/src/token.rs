/// One token of a version string together with the separator text that
/// precedes it. The first token's separator is always empty, as is the
/// separator of a token split off at a digit/letter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub separator: &'a str,
    pub text: &'a str,
}

pub fn is_separator(ch: char) -> bool {
    ch == '.' || ch == '-'
}

/// Splits a version string into tokens.
///
/// A run of `.`/`-` characters ends the current token, and so does a change
/// between ASCII digits and anything else. A separator run at the very start
/// or end of the input yields a zero-length token. Never fails: every input,
/// however odd, decomposes into some token sequence, and the empty string
/// decomposes into none.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    if input.is_empty() {
        return tokens;
    }

    let mut separator = 0..0;
    let mut start = 0;
    let mut in_separator = false;
    let mut previous_digit = false;

    for (i, ch) in input.char_indices() {
        if is_separator(ch) {
            if !in_separator {
                tokens.push(Token {
                    separator: &input[separator.clone()],
                    text: &input[start..i],
                });
                separator = i..i;
                in_separator = true;
            }
            continue;
        }

        let digit = ch.is_ascii_digit();
        if in_separator {
            separator.end = i;
            start = i;
            in_separator = false;
        } else if i > start && digit != previous_digit {
            tokens.push(Token {
                separator: &input[separator.clone()],
                text: &input[start..i],
            });
            separator = i..i;
            start = i;
        }
        previous_digit = digit;
    }

    if in_separator {
        tokens.push(Token {
            separator: &input[separator.start..],
            text: "",
        });
    } else {
        tokens.push(Token {
            separator: &input[separator],
            text: &input[start..],
        });
    }

    tokens
}
