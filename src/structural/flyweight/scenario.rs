use serde::Deserialize;

use super::kind::BulletKind;
use crate::error::{PatternError, Result};

/// Volleys fired by the demo binary.
pub const BUILTIN_SCENARIO: &str = r#"
[[volley]]
kind = "gun"
count = 3

[[volley]]
kind = "laser"
count = 1
"#;

#[derive(Debug, Deserialize)]
struct RawScenario {
    #[serde(default, rename = "volley")]
    volleys: Vec<RawVolley>,
}

#[derive(Debug, Deserialize)]
struct RawVolley {
    kind: String,
    count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volley {
    pub kind: BulletKind,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub volleys: Vec<Volley>,
}

impl Scenario {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_SCENARIO)
    }

    /// Parse and validate. Kind names go through the same parser the factory
    /// uses, so an unknown kind is an `InvalidDiscriminant`.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawScenario = toml::from_str(content)?;
        if raw.volleys.is_empty() {
            return Err(PatternError::Config("at least one [[volley]] is required".into()));
        }

        let volleys = raw
            .volleys
            .into_iter()
            .enumerate()
            .map(|(index, volley)| -> Result<Volley> {
                if volley.count == 0 {
                    return Err(PatternError::Config(format!(
                        "volley {index}: count must be greater than zero"
                    )));
                }
                Ok(Volley {
                    kind: volley.kind.parse()?,
                    count: volley.count,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Scenario { volleys })
    }

    pub fn total_bullets(&self) -> usize {
        self.volleys.iter().map(|v| v.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenario() {
        let scenario = Scenario::builtin().unwrap();
        assert_eq!(
            scenario.volleys,
            vec![
                Volley { kind: BulletKind::Gun, count: 3 },
                Volley { kind: BulletKind::Laser, count: 1 },
            ]
        );
        assert_eq!(scenario.total_bullets(), 4);
    }

    #[test]
    fn test_unknown_kind_is_invalid_discriminant() {
        let toml = "[[volley]]\nkind = \"cannon\"\ncount = 1\n";
        assert!(matches!(
            Scenario::from_toml(toml),
            Err(PatternError::InvalidDiscriminant { .. })
        ));
    }

    #[test]
    fn test_zero_count_rejected() {
        let toml = "[[volley]]\nkind = \"gun\"\ncount = 0\n";
        let err = Scenario::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("volley 0"));
    }

    #[test]
    fn test_empty_scenario_rejected() {
        assert!(matches!(Scenario::from_toml(""), Err(PatternError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Scenario::from_toml("[[volley]\nkind = "),
            Err(PatternError::Toml(_))
        ));
    }
}
