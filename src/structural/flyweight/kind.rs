use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Closed set of bullet kinds. Each kind owns exactly one shared sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BulletKind {
    Gun,
    Laser,
    Rocket,
}

impl BulletKind {
    pub const ALL: [BulletKind; 3] = [BulletKind::Gun, BulletKind::Laser, BulletKind::Rocket];

    pub fn code(self) -> u8 {
        match self {
            BulletKind::Gun => 0,
            BulletKind::Laser => 1,
            BulletKind::Rocket => 2,
        }
    }

    /// Upper-case label used in the factory trace, e.g. `GUN_BULLET`.
    pub fn label(self) -> &'static str {
        match self {
            BulletKind::Gun => "GUN_BULLET",
            BulletKind::Laser => "LASER_BULLET",
            BulletKind::Rocket => "ROCKET_BULLET",
        }
    }

    /// Type-style name used in draw output, e.g. `GunBullet`.
    pub fn type_name(self) -> &'static str {
        match self {
            BulletKind::Gun => "GunBullet",
            BulletKind::Laser => "LaserBullet",
            BulletKind::Rocket => "RocketBullet",
        }
    }

    /// Per-tick displacement for a freshly fired bullet of this kind.
    pub fn muzzle_velocity(self) -> (i32, i32) {
        match self {
            BulletKind::Gun => (4, 0),
            BulletKind::Laser => (12, 0),
            BulletKind::Rocket => (2, 1),
        }
    }
}

impl fmt::Display for BulletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for BulletKind {
    type Error = PatternError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        BulletKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| PatternError::invalid_discriminant("bullet", code))
    }
}

impl FromStr for BulletKind {
    type Err = PatternError;

    /// Accepts the short name (`gun`) or the label (`GUN_BULLET`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BulletKind::ALL
            .into_iter()
            .find(|kind| {
                let short = kind.label().trim_end_matches("_BULLET");
                needle.eq_ignore_ascii_case(short) || needle.eq_ignore_ascii_case(kind.label())
            })
            .ok_or_else(|| PatternError::invalid_discriminant("bullet", needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_kind() {
        for kind in BulletKind::ALL {
            assert_eq!(BulletKind::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = BulletKind::try_from(7).unwrap_err();
        assert!(matches!(
            err,
            PatternError::InvalidDiscriminant { kind: "bullet", ref value } if value == "7"
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("gun".parse::<BulletKind>().unwrap(), BulletKind::Gun);
        assert_eq!("Laser".parse::<BulletKind>().unwrap(), BulletKind::Laser);
        assert_eq!(" ROCKET_BULLET ".parse::<BulletKind>().unwrap(), BulletKind::Rocket);
        assert!("cannonball".parse::<BulletKind>().is_err());
        assert!("".parse::<BulletKind>().is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(BulletKind::Gun.to_string(), "GUN_BULLET");
    }
}
