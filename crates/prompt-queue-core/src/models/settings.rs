use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// User settings, persisted under their own key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Completed items count down before disappearing (otherwise removed at once)
    #[serde(default = "default_true")]
    pub animated_deletion_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animated_deletion_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_animation() {
        assert!(Settings::default().animated_deletion_enabled);
    }

    #[test]
    fn test_wire_name_is_camel_case() {
        let json = serde_json::to_string(&Settings {
            animated_deletion_enabled: false,
        })
        .unwrap();
        assert_eq!(json, r#"{"animatedDeletionEnabled":false}"#);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.animated_deletion_enabled);
    }
}
