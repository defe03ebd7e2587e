use std::fmt;
use std::str::FromStr;

/// Difficulty of an example.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ShaderLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl ShaderLevel {
    pub const ALL: [ShaderLevel; 3] = [
        ShaderLevel::Basic,
        ShaderLevel::Intermediate,
        ShaderLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShaderLevel::Basic => "basic",
            ShaderLevel::Intermediate => "intermediate",
            ShaderLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ShaderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shader level `{0}`")]
pub struct ParseLevelError(pub String);

impl FromStr for ShaderLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShaderLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_level() {
        for level in ShaderLevel::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
        assert!("expert".parse::<ShaderLevel>().is_err());
    }

    #[test]
    fn ordered_by_difficulty() {
        assert!(ShaderLevel::Basic < ShaderLevel::Intermediate);
        assert!(ShaderLevel::Intermediate < ShaderLevel::Advanced);
    }
}
