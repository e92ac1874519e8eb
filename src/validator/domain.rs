use super::Scanner;
use super::chars::{is_atext, is_digit};

/// Classification d'un label de domaine, accumulée caractère par
/// caractère. `None` = label vide/invalide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubdomainKind {
    None,
    Alphabetic,
    Numeric,
    AlphaNumeric,
}

impl SubdomainKind {
    fn absorb(self, c: char) -> Self {
        if is_digit(c) {
            match self {
                Self::None | Self::Numeric => Self::Numeric,
                _ => Self::AlphaNumeric,
            }
        } else if c.is_alphabetic() {
            match self {
                Self::None | Self::Alphabetic => Self::Alphabetic,
                _ => Self::AlphaNumeric,
            }
        } else {
            // ponctuation atext: ne change pas la classification
            self
        }
    }

    fn accepted_as_top_level(self) -> bool {
        matches!(self, Self::Alphabetic | Self::AlphaNumeric)
    }
}

impl Scanner<'_> {
    /// Domaine dot-atom: labels séparés par des `.` simples.
    /// Un domaine à label unique n'est admis que si
    /// `allow_top_level_domains`; un dernier label purement numérique
    /// (ou sans lettre ni chiffre) est toujours refusé.
    pub(crate) fn skip_domain(
        &mut self,
        allow_top_level_domains: bool,
        allow_international: bool,
    ) -> bool {
        let Some(mut kind) = self.skip_subdomain(allow_international) else {
            return false;
        };
        let mut dotted = false;
        while self.peek() == Some('.') {
            self.bump();
            dotted = true;
            match self.skip_subdomain(allow_international) {
                Some(k) => kind = k,
                None => return false,
            }
        }
        if !dotted && !allow_top_level_domains {
            return false;
        }
        kind.accepted_as_top_level()
    }

    /// Un label: run maximal d'atext, échec si vide.
    fn skip_subdomain(&mut self, allow_international: bool) -> Option<SubdomainKind> {
        let start = self.pos;
        let mut kind = SubdomainKind::None;
        while let Some(c) = self.peek() {
            if !is_atext(c, allow_international) {
                break;
            }
            kind = kind.absorb(c);
            self.bump();
        }
        (self.pos > start).then_some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(s: &str, tld: bool, international: bool) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let mut scanner = Scanner::new(&chars);
        scanner.skip_domain(tld, international) && scanner.at_end()
    }

    #[test]
    fn basic_domain_ok() {
        assert!(domain("example.com", false, false));
        assert!(domain("sub.domain.example.com", false, false));
    }

    #[test]
    fn empty_and_doubled_labels() {
        assert!(!domain("example..com", false, false));
        assert!(!domain(".example.com", false, false));
        assert!(!domain("example.com.", false, false));
    }

    #[test]
    fn top_level_policy() {
        assert!(!domain("com", false, false));
        assert!(domain("com", true, false));
    }

    #[test]
    fn numeric_top_level_always_rejected() {
        assert!(!domain("123", true, false));
        assert!(!domain("example.123", false, false));
        assert!(!domain("example.123", true, false));
        // mixte accepté
        assert!(domain("example.c0m", false, false));
    }

    #[test]
    fn classification_upgrades() {
        let k = "a1".chars().fold(SubdomainKind::None, SubdomainKind::absorb);
        assert_eq!(k, SubdomainKind::AlphaNumeric);
        let k = "42".chars().fold(SubdomainKind::None, SubdomainKind::absorb);
        assert_eq!(k, SubdomainKind::Numeric);
        let k = "a-b".chars().fold(SubdomainKind::None, SubdomainKind::absorb);
        assert_eq!(k, SubdomainKind::Alphabetic);
    }

    #[test]
    fn international_labels() {
        assert!(!domain("exämple.com", false, false));
        assert!(domain("exämple.com", false, true));
    }
}
