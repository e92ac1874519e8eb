use super::Scanner;
use super::chars::{is_atext, is_control};

/// Caractère admis dans une quoted-string (échappé ou non);
/// `"` et `\` non échappés sont traités par les branches du scan.
fn is_quoted_text(c: char, allow_international: bool) -> bool {
    !is_control(c) && (c.is_ascii() || allow_international)
}

impl Scanner<'_> {
    /// Local-part: quoted-string ou dot-atom, branche choisie sur le
    /// premier caractère. Laisse le curseur juste après le local-part.
    pub(crate) fn skip_local_part(&mut self, allow_international: bool) -> bool {
        match self.peek() {
            Some('"') => self.skip_quoted_string(allow_international),
            Some(_) => self.skip_dot_atom(allow_international),
            None => false,
        }
    }

    /// `"..."` avec échappement backslash; le guillemet fermant est requis.
    fn skip_quoted_string(&mut self, allow_international: bool) -> bool {
        self.bump(); // '"' ouvrant
        loop {
            match self.peek() {
                None => return false, // guillemet fermant manquant
                Some('"') => {
                    self.bump();
                    return true;
                }
                Some('\\') => {
                    self.bump();
                    match self.peek() {
                        Some(c) if is_quoted_text(c, allow_international) => self.bump(),
                        _ => return false,
                    }
                }
                Some(c) if is_quoted_text(c, allow_international) => self.bump(),
                Some(_) => return false,
            }
        }
    }

    /// Atomes séparés par des `.` simples, sans point initial/terminal.
    fn skip_dot_atom(&mut self, allow_international: bool) -> bool {
        loop {
            let start = self.pos;
            while matches!(self.peek(), Some(c) if is_atext(c, allow_international)) {
                self.bump();
            }
            if self.pos == start {
                return false;
            }
            if self.peek() == Some('.') {
                self.bump();
            } else {
                return true;
            }
        }
    }
}
