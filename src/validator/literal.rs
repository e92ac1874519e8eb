use super::Scanner;
use super::chars::{is_digit, is_hex_digit};

// plus court littéral possible après '[': "1.1.1.1]"
const MIN_LITERAL_LEN: usize = 8;

const IPV6_PREFIX: [char; 5] = ['i', 'p', 'v', '6', ':'];

impl Scanner<'_> {
    /// Littéral de domaine: `[` puis `IPv6:`+littéral IPv6 (préfixe
    /// insensible à la casse) ou littéral IPv4 nu, puis `]`.
    /// Laisse le curseur juste après `]`.
    pub(crate) fn skip_domain_literal(&mut self) -> bool {
        if self.peek() != Some('[') {
            return false;
        }
        self.bump();
        if self.remaining() < MIN_LITERAL_LEN {
            return false;
        }
        if self.has_ipv6_prefix() {
            self.advance(IPV6_PREFIX.len());
            if !self.skip_ipv6() {
                return false;
            }
        } else if !self.skip_ipv4() {
            return false;
        }
        if self.peek() != Some(']') {
            return false;
        }
        self.bump();
        true
    }

    fn has_ipv6_prefix(&self) -> bool {
        self.lookahead(IPV6_PREFIX.len())
            .is_some_and(|run| {
                run.iter()
                    .zip(IPV6_PREFIX)
                    .all(|(c, p)| c.to_ascii_lowercase() == p)
            })
    }

    /// Exactement 4 groupes décimaux 0..=255 séparés par `.`.
    /// Pas de restriction sur les zéros de tête (simplification assumée).
    pub(crate) fn skip_ipv4(&mut self) -> bool {
        for group in 0..4 {
            if group > 0 {
                if self.peek() != Some('.') {
                    return false;
                }
                self.bump();
            }
            let start = self.pos;
            let mut value: u32 = 0;
            while let Some(c) = self.peek() {
                if !is_digit(c) {
                    break;
                }
                value = value * 10 + u32::from(c as u8 - b'0');
                self.bump();
                if self.pos - start > 3 {
                    return false;
                }
            }
            if self.pos == start || value > 255 {
                return false;
            }
        }
        true
    }

    /// Séquence d'hextets séparés par `:`, une seule compression `::`,
    /// quad IPv4 terminal admis. Approximation volontairement permissive
    /// de la grammaire IPv6 (filtrage syntaxique, pas de conformité RFC).
    pub(crate) fn skip_ipv6(&mut self) -> bool {
        let mut groups = 0usize;
        let mut compact = false;
        let mut need_group = false;
        loop {
            // point de reprise pour le rembobinage IPv4-dans-IPv6
            let checkpoint = self.pos;
            let mut digits = 0usize;
            while matches!(self.peek(), Some(c) if is_hex_digit(c)) {
                self.bump();
                digits += 1;
            }
            if digits > 4 {
                return false;
            }
            if digits > 0 {
                if self.peek() == Some('.') && (compact || groups == 6) {
                    // la fin de l'adresse est un quad IPv4: on relit le
                    // run courant comme son premier octet
                    self.pos = checkpoint;
                    if !self.skip_ipv4() {
                        return false;
                    }
                    return if compact { groups <= 4 } else { groups == 6 };
                }
                groups += 1;
                need_group = false;
                if self.peek() != Some(':') {
                    break;
                }
            } else if self.peek() != Some(':') {
                break;
            }
            let mut colons = 0usize;
            while self.peek() == Some(':') {
                self.bump();
                colons += 1;
                if colons > 2 {
                    return false;
                }
            }
            if colons == 2 {
                if compact {
                    return false; // une seule compression
                }
                compact = true;
                need_group = false;
            } else if digits == 0 {
                return false; // ':' isolé sans hextet devant
            } else {
                need_group = true;
            }
        }
        !need_group && if compact { groups <= 6 } else { groups == 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let mut scanner = Scanner::new(&chars);
        scanner.skip_domain_literal() && scanner.at_end()
    }

    fn ipv6(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let mut scanner = Scanner::new(&chars);
        scanner.skip_ipv6() && scanner.at_end()
    }

    #[test]
    fn ipv4_bounds() {
        assert!(literal("[0.0.0.0]"));
        assert!(literal("[255.255.255.255]"));
        assert!(literal("[192.168.1.1]"));
        assert!(!literal("[300.1.1.1]"));
        assert!(!literal("[256.1.1.1]"));
        assert!(!literal("[1.1.1]"));
        assert!(!literal("[1.1.1.1.1]"));
        assert!(!literal("[0001.1.1.1]")); // 4 chiffres
        assert!(literal("[010.1.1.1]")); // zéros de tête tolérés
    }

    #[test]
    fn ipv6_good() {
        for s in [
            "::1",
            "::",
            "::ffff:1.2.3.4",
            "2001:db8:85a3:8d3:1319:8a2e:370:7348",
            "1:2:3:4:5:6::",
            "1:2:3:4:5::6",
            "fFfF::1",
            "2001:db8:85a3::8a2e:0",
            "1:2:3:4:5:6:1.2.3.4",
        ] {
            assert!(ipv6(s), "{s}");
        }
    }

    #[test]
    fn ipv6_bad() {
        for s in [
            "::fFfF::1",                               // double compression
            "2001:db8:::1",                            // trois ':'
            "2001:db8:85a3:8d3:1319:8a2e:370:7348:0",  // 9 groupes
            "2001:db8:85a3::8a2e:0:",                  // ':' terminal
            "20001:db8::1",                            // hextet > 4 chiffres
            "1:2:3:4:5:6:7",                           // 7 groupes sans compression
            "1:2:3:4:5:6:7::",                         // plus de 6 groupes avec compression
            ":1::2",                                   // ':' isolé en tête
            "::ffff:1.2.3.256",                        // octet > 255
            "1:2:3:4:5:1.2.3.4",                       // quad après 5 groupes
        ] {
            assert!(!ipv6(s), "{s}");
        }
    }

    #[test]
    fn dispatcher() {
        assert!(literal("[IPv6:2001:db8::1]"));
        assert!(literal("[ipv6:2001:db8::1]")); // préfixe insensible à la casse
        assert!(!literal("[IPv6:2001:db8:::1]"));
        assert!(!literal("[2001:db8::1]")); // IPv6 sans préfixe -> lu comme IPv4
        assert!(!literal("[192.168.1.1")); // ']' manquant
        assert!(!literal("[IPv6:]"));
    }

    #[test]
    fn dispatcher_short_input() {
        // moins de 8 caractères après '['
        assert!(!literal("[::1]"));
        assert!(!literal("[1.1.1]"));
    }

    #[test]
    fn dispatcher_leaves_cursor_after_bracket() {
        let chars: Vec<char> = "[192.168.1.1]rest".chars().collect();
        let mut scanner = Scanner::new(&chars);
        assert!(scanner.skip_domain_literal());
        assert_eq!(scanner.pos, 13);
    }
}
