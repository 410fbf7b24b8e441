use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use regex::Regex;
use tracing::error;

pub const PASSWORD_POLICY_MESSAGE: &str =
    "Password must be at least 6 characters and include uppercase, lowercase, number, and special character";

/// Signup password policy: at least 6 characters with one lowercase, one
/// uppercase, one digit and one symbol.
pub fn password_meets_policy(plain: &str) -> bool {
    lazy_static! {
        static ref LOWER_RE: Regex = Regex::new(r"[a-z]").unwrap();
        static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").unwrap();
        static ref DIGIT_RE: Regex = Regex::new(r"\d").unwrap();
        static ref SYMBOL_RE: Regex =
            Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).unwrap();
    }
    plain.chars().count() >= 6
        && LOWER_RE.is_match(plain)
        && UPPER_RE.is_match(plain)
        && DIGIT_RE.is_match(plain)
        && SYMBOL_RE.is_match(plain)
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
