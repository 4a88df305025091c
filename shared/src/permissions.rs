/// Attribute on the page `<body>` carrying the privilege flag.
pub const PRIVILEGE_ATTRIBUTE: &str = "data-is-superuser";

/// What the current session may see, read once per page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capability {
    privileged: bool,
}

impl Capability {
    pub const PRIVILEGED: Self = Self { privileged: true };
    pub const STANDARD: Self = Self { privileged: false };

    /// Normalizes the raw attribute value. Only the exact lowercase string
    /// `"true"` grants privilege; a missing attribute does not.
    pub fn from_attribute(value: Option<&str>) -> Self {
        Self {
            privileged: value == Some("true"),
        }
    }

    pub fn is_privileged(self) -> bool {
        self.privileged
    }

    /// Phone and email are shown in the event detail dialog.
    pub fn can_view_contact(self) -> bool {
        self.privileged
    }

    /// The search panel is rendered at all.
    pub fn can_search(self) -> bool {
        self.privileged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_true_is_privileged() {
        let capability = Capability::from_attribute(Some("true"));
        assert_eq!(capability, Capability::PRIVILEGED);
        assert!(capability.can_search());
        assert!(capability.can_view_contact());
    }

    #[test]
    fn test_other_values_are_not_privileged() {
        for value in ["True", "TRUE", "", "1", "yes", " true", "false"] {
            let capability = Capability::from_attribute(Some(value));
            assert!(!capability.is_privileged(), "{value:?} must not grant privilege");
        }
    }

    #[test]
    fn test_missing_attribute_is_not_privileged() {
        let capability = Capability::from_attribute(None);
        assert_eq!(capability, Capability::STANDARD);
        assert_eq!(capability, Capability::default());
        assert!(!capability.can_search());
    }
}
