use crate::domain::public_cloud::DomainError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// OpenSSH public key, RSA or ED25519
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshKey(String);

impl SshKey {
    pub const REGULAR_EXPRESSION: &'static str =
        r"^(ssh-rsa AAAAB3NzaC1yc2|ssh-ed25519 AAAAC3NzaC1lZDI1NTE5)[0-9A-Za-z+/]+[=]{0,3}( .*)?$";

    pub fn new(value: &str) -> Result<Self, DomainError> {
        match pattern() {
            Some(regex) if regex.is_match(value) => Ok(Self(value.to_string())),
            _ => Err(DomainError::InvalidSshKey(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SshKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(SshKey::REGULAR_EXPRESSION).ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSA: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABgQDWvBbugarDWMkELKmnzzYaxPkDpS9qDokehBM+OhgrgyTWssaREYPDHsRjq7Ldv/8kTdK9i+f9HMi/BTskZrd5npFtO2gfSgFxeUALcqNDcjpXvQJxLUShNFmtxPtQLKlreyWB1r8mcAQBC/jrWD5I+mTZ7uCs4CNV4L0eLv8J1w==";
    const ED25519: &str =
        "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIBYQmRWXiBNvdf5tJ8YJ6e2lk2/1ZaGhGmNNxd2VpRkp user@host";

    #[test]
    fn accepts_rsa_and_ed25519_keys() {
        assert_eq!(SshKey::new(RSA).unwrap().to_string(), RSA);
        assert_eq!(SshKey::new(ED25519).unwrap().as_str(), ED25519);
    }

    #[test]
    fn accepts_comments_with_spaces() {
        let key = format!("{} John laptop", ED25519.trim_end_matches(" user@host"));
        assert_eq!(SshKey::new(&key).unwrap().as_str(), key);
    }

    #[test]
    fn rejects_other_strings() {
        for value in ["tralala", "", "ssh-dss AAAAB3NzaC1kc3MAAACBAP", "ssh-rsa"] {
            assert_eq!(
                SshKey::new(value).unwrap_err(),
                DomainError::InvalidSshKey(value.to_string())
            );
        }
    }
}
