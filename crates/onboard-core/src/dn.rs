//! Distinguished-name helpers.
//!
//! The new account is created in the template user's own container: its DN
//! keeps everything after the template's leading RDN and substitutes a
//! `CN=` built from the new account name. Splitting honors `\`-escaped
//! separators so values like `CN=Doe\, Jane` survive intact.

use crate::error::{OnboardError, OnboardResult};

/// Split a DN into its RDN components, honoring `\`-escapes.
pub fn split_dn(dn: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = dn.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' => {
                components.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    let last = current.trim();
    if !last.is_empty() {
        components.push(last.to_string());
    }
    components
}

/// The container a DN lives in: everything after the leading RDN.
///
/// Fails with `InvalidContainer` when the DN has no parent to place a new
/// entry under.
pub fn parent_container(dn: &str) -> OnboardResult<String> {
    let components = split_dn(dn);
    if components.len() < 2 {
        return Err(OnboardError::InvalidContainer {
            container: dn.to_string(),
        });
    }
    Ok(components[1..].join(","))
}

/// Rebuild `dn` with its leading RDN replaced by `CN=<common_name>`.
pub fn with_leading_cn(dn: &str, common_name: &str) -> OnboardResult<String> {
    let container = parent_container(dn)?;
    Ok(format!("CN={},{}", escape_rdn_value(common_name), container))
}

/// Escape the characters that terminate or alter an RDN value.
fn escape_rdn_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_plain_components() {
        assert_eq!(
            split_dn("CN=jane.doe,OU=Staff,DC=example,DC=com"),
            vec!["CN=jane.doe", "OU=Staff", "DC=example", "DC=com"]
        );
    }

    #[test]
    fn split_honors_escaped_commas() {
        assert_eq!(
            split_dn(r"CN=Doe\, Jane,OU=Staff,DC=example,DC=com"),
            vec![r"CN=Doe\, Jane", "OU=Staff", "DC=example", "DC=com"]
        );
    }

    #[test]
    fn parent_container_drops_the_leading_rdn() {
        assert_eq!(
            parent_container("CN=tmpl,OU=Staff,DC=example,DC=com").unwrap(),
            "OU=Staff,DC=example,DC=com"
        );
    }

    #[test]
    fn parent_container_rejects_a_bare_rdn() {
        assert!(matches!(
            parent_container("CN=orphan"),
            Err(OnboardError::InvalidContainer { .. })
        ));
    }

    #[test]
    fn with_leading_cn_substitutes_the_account() {
        assert_eq!(
            with_leading_cn("CN=tmpl,OU=Staff,DC=example,DC=com", "jane.doe").unwrap(),
            "CN=jane.doe,OU=Staff,DC=example,DC=com"
        );
    }

    #[test]
    fn with_leading_cn_escapes_separators() {
        assert_eq!(
            with_leading_cn("CN=tmpl,OU=Staff,DC=example,DC=com", "doe, jane").unwrap(),
            r"CN=doe\, jane,OU=Staff,DC=example,DC=com"
        );
    }
}
