#![forbid(unsafe_code)]
//! mailsyntax_lib — validation syntaxique d'adresses e-mail

pub mod validator;
pub use validator::{
    EmailError,
    MAX_ADDRESS_LENGTH,
    MAX_LOCAL_PART_LENGTH,
    Policy,
    ValidationReport,
    check_email,
    validate_email,
    verify_email,
};
