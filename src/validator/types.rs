use thiserror::Error;

/// Limite conventionnelle du local-part (RFC 5321).
pub const MAX_LOCAL_PART_LENGTH: usize = 64;
/// Limite conventionnelle de l'adresse complète, `@` compris (RFC 5321).
pub const MAX_ADDRESS_LENGTH: usize = 254;

/// Drapeaux de politique, constants pendant toute la validation.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// accepte un domaine à label unique (`user@com`)
    pub allow_top_level_domains: bool,
    /// accepte les codepoints >= 0x80 dans le local-part et les labels
    pub allow_international: bool,
    /// longueur maximale du local-part
    pub max_local_part_length: usize,
    /// longueur maximale de l'adresse complète
    pub max_address_length: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allow_top_level_domains: false,
            allow_international: false,
            max_local_part_length: MAX_LOCAL_PART_LENGTH,
            max_address_length: MAX_ADDRESS_LENGTH,
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub original: String,
    pub ok: bool,
    pub reason: Option<String>,
}

/// Cause de rejet, une variante par étape de l'analyse.
/// Toujours retournée en valeur: la validation ne panique jamais.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("empty input")]
    EmptyInput,
    #[error("total length {length} > {max}")]
    TooLong { length: usize, max: usize },
    #[error("invalid local part")]
    LocalPart,
    #[error("missing '@'")]
    MissingAtSign,
    #[error("invalid domain")]
    Domain,
    #[error("invalid domain literal")]
    DomainLiteral,
    #[error("trailing characters after domain")]
    TrailingData,
}
