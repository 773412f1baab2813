use std::fmt;

use serde::{Deserialize, Serialize};

/// A column in the journey timeline representing a process stage.
///
/// Phase ordering is positional: a phase's index in the catalog's declared
/// sequence defines both its column coordinate and its sort precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A lane representing an actor type (au pair, host family, ops, core system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Lane index. Must equal the role's declaration order in the catalog.
    pub lane: usize,
    pub color: String,
}

/// A single journey action, owned by exactly one role and occurring in
/// exactly one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    /// Owning role id. Must resolve against the catalog.
    pub role: String,
    /// Owning phase id. Must resolve against the catalog.
    pub phase: String,
    pub label: String,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Render the step as a compact card.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub small: bool,
}

/// Short tag on a step signaling a special property: a trust checkpoint, an
/// AI-driven step, or a timed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    Trust,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "24h")]
    Window24h,
    #[serde(rename = "48h")]
    Window48h,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Badge::Trust => "Trust",
            Badge::Ai => "AI",
            Badge::Window24h => "24h",
            Badge::Window48h => "48h",
        };
        write!(f, "{}", label)
    }
}

impl Step {
    /// Convenience constructor for a plain step with no badge.
    pub fn new(id: &str, role: &str, phase: &str, label: &str, desc: &str) -> Self {
        Self {
            id: id.to_string(),
            role: role.to_string(),
            phase: phase.to_string(),
            label: label.to_string(),
            desc: desc.to_string(),
            badge: None,
            small: false,
        }
    }

    /// Attaches a badge to the step.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Marks the step for compact rendering.
    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_serde_names() {
        assert_eq!(serde_json::to_string(&Badge::Window24h).unwrap(), "\"24h\"");
        assert_eq!(serde_json::to_string(&Badge::Ai).unwrap(), "\"AI\"");
        assert_eq!(serde_json::to_string(&Badge::Trust).unwrap(), "\"Trust\"");

        let badge: Badge = serde_json::from_str("\"48h\"").unwrap();
        assert_eq!(badge, Badge::Window48h);
    }

    #[test]
    fn test_step_builder() {
        let step = Step::new("s1", "AP", "onb", "Register", "Create account.")
            .with_badge(Badge::Trust)
            .small();
        assert_eq!(step.badge, Some(Badge::Trust));
        assert!(step.small);
    }

    #[test]
    fn test_small_flag_omitted_when_false() {
        let step = Step::new("s1", "AP", "onb", "Register", "Create account.");
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("small").is_none());
        assert!(json.get("badge").is_none());
    }
}
