//! Composite key synthesis for the package-policy wire format.
//!
//! Inputs are addressed by `"<policyTemplate>-<type>"` and streams by
//! `"<package>.<dataStream>"`. Internally both are two-field structs; the
//! composite string form exists only at the wire boundary via `Display`.
//! Distinct field pairs that collapse to the same composite string are a
//! caller error and are not detected here.

use std::fmt;

/// Identity of an input within a package policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputKey {
    pub policy_template: String,
    pub input_type: String,
}

impl InputKey {
    pub fn new(policy_template: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            policy_template: policy_template.into(),
            input_type: input_type.into(),
        }
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.policy_template, self.input_type)
    }
}

/// Identity of a stream within an input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamKey {
    pub package: String,
    pub data_stream: String,
}

impl StreamKey {
    pub fn new(package: impl Into<String>, data_stream: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            data_stream: data_stream.into(),
        }
    }
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.data_stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_wire_form() {
        let key = InputKey::new("winlogs", "winlog");
        assert_eq!(key.to_string(), "winlogs-winlog");
    }

    #[test]
    fn test_stream_key_wire_form() {
        let key = StreamKey::new("winlog", "winlog");
        assert_eq!(key.to_string(), "winlog.winlog");
    }

    #[test]
    fn test_key_synthesis_is_deterministic() {
        assert_eq!(
            InputKey::new("logs", "logfile").to_string(),
            InputKey::new("logs", "logfile").to_string()
        );
        assert_eq!(
            StreamKey::new("system", "cpu").to_string(),
            StreamKey::new("system", "cpu").to_string()
        );
    }
}
