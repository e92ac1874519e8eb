//! Analyseur descendant à curseur partagé: chaque sous-parseur avance
//! `pos` sur la construction qu'il reconnaît, ou échoue. Pas d'état
//! global, pas d'E/S, pas de panique sur entrée adverse.

mod chars;
mod domain;
mod literal;
mod local;
mod types;

pub use types::{
    EmailError, MAX_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH, Policy, ValidationReport,
};

/// Curseur de lecture sur la séquence de scalaires Unicode du candidat.
pub(crate) struct Scanner<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.chars.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    pub(crate) fn lookahead(&self, n: usize) -> Option<&[char]> {
        self.chars.get(self.pos..self.pos + n)
    }
}

/// Verdict booléen historique (spec §6 du produit d'origine).
pub fn validate_email(email: &str, policy: &Policy) -> bool {
    verify_email(email, policy).is_ok()
}

/// Verdict discriminé: `Ok(())` ou la première cause de rejet rencontrée.
pub fn verify_email(email: &str, policy: &Policy) -> Result<(), EmailError> {
    let verdict = scan_address(email, policy);
    #[cfg(feature = "with-tracing")]
    tracing::debug!(input = %email, ok = verdict.is_ok(), "email syntax verdict");
    verdict
}

/// Forme rapport, consommée par la CLI.
pub fn check_email(email: &str, policy: &Policy) -> ValidationReport {
    let reason = verify_email(email, policy).err().map(|e| e.to_string());
    ValidationReport {
        original: email.to_string(),
        ok: reason.is_none(),
        reason,
    }
}

fn scan_address(email: &str, policy: &Policy) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::EmptyInput);
    }
    let length = measured_str_length(email, policy.allow_international);
    if length > policy.max_address_length {
        return Err(EmailError::TooLong {
            length,
            max: policy.max_address_length,
        });
    }

    let chars: Vec<char> = email.chars().collect();
    let mut scanner = Scanner::new(&chars);

    if !scanner.skip_local_part(policy.allow_international) {
        return Err(EmailError::LocalPart);
    }
    let local_length = measured_span_length(&chars[..scanner.pos], policy.allow_international);
    if local_length > policy.max_local_part_length {
        return Err(EmailError::LocalPart);
    }

    if scanner.peek() != Some('@') {
        return Err(EmailError::MissingAtSign);
    }
    scanner.bump();

    match scanner.peek() {
        None => Err(EmailError::Domain), // rien après '@'
        Some('[') => {
            if !scanner.skip_domain_literal() {
                return Err(EmailError::DomainLiteral);
            }
            if !scanner.at_end() {
                return Err(EmailError::TrailingData);
            }
            Ok(())
        }
        Some(_) => {
            if !scanner.skip_domain(policy.allow_top_level_domains, policy.allow_international) {
                return Err(EmailError::Domain);
            }
            if !scanner.at_end() {
                return Err(EmailError::TrailingData);
            }
            Ok(())
        }
    }
}

// Longueur sensible à la politique: en non-international la mesure se
// fait en octets UTF-8 (transport 7 bits, le non-ASCII compte pour ses
// unités encodées); en international, en scalaires Unicode.
fn measured_str_length(s: &str, allow_international: bool) -> usize {
    if allow_international {
        s.chars().count()
    } else {
        s.len()
    }
}

fn measured_span_length(span: &[char], allow_international: bool) -> usize {
    if allow_international {
        span.len()
    } else {
        span.iter().map(|c| c.len_utf8()).sum()
    }
}
