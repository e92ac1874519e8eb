//! Prédicats de classification de caractères (sans état).

/// Caractère de contrôle (catégorie Cc: C0, DEL, C1).
pub(crate) fn is_control(c: char) -> bool {
    c.is_control()
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// atext: alphanumérique ASCII + ponctuation autorisée hors quotes,
/// étendu à tout codepoint >= 0x80 en mode international.
pub(crate) fn is_atext(c: char, allow_international: bool) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '#'
                    | '$'
                    | '%'
                    | '&'
                    | '\''
                    | '*'
                    | '+'
                    | '-'
                    | '/'
                    | '='
                    | '?'
                    | '^'
                    | '_'
                    | '`'
                    | '{'
                    | '|'
                    | '}'
                    | '~'
            )
    } else {
        allow_international && !is_control(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atext_punctuation() {
        for c in "!#$%&'*+-/=?^_`{|}~".chars() {
            assert!(is_atext(c, false), "{c}");
        }
        for c in "@.\"\\()[],;: ".chars() {
            assert!(!is_atext(c, false), "{c}");
        }
    }

    #[test]
    fn atext_international_toggle() {
        assert!(!is_atext('é', false));
        assert!(is_atext('é', true));
        assert!(is_atext('漢', true));
        // contrôle C1 refusé même en international
        assert!(!is_atext('\u{0085}', true));
    }

    #[test]
    fn hex_digits() {
        assert!(is_hex_digit('a'));
        assert!(is_hex_digit('F'));
        assert!(is_hex_digit('0'));
        assert!(!is_hex_digit('g'));
        assert!(is_digit('7'));
        assert!(!is_digit('a'));
    }

    #[test]
    fn controls() {
        assert!(is_control('\u{0000}'));
        assert!(is_control('\u{007F}'));
        assert!(!is_control(' '));
    }
}
