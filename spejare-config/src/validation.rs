//! Custom validation helpers.

use validator::ValidationError;

/// Validate that an interface name follows Linux naming conventions. Used by
/// the CLI before a name is handed to the capture backend.
pub fn validate_interface(name: &str) -> Result<(), ValidationError> {
    let re = regex::Regex::new("^[a-zA-Z0-9_.-]+$")
        .map_err(|_| ValidationError::new("invalid_regex"))?;

    if !name.is_empty() && name.len() <= 15 && re.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_interface"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_interface_names() {
        for name in ["eth0", "wlp3s0", "en0", "br-lan", "veth_a1"] {
            assert!(validate_interface(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_bogus_names() {
        for name in ["", "a name with spaces", "way-too-long-interface-name"] {
            assert!(validate_interface(name).is_err(), "{name}");
        }
    }
}
