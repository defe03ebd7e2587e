use std::fmt;
use std::str::FromStr;

/// Body a spatial scene renders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Cube,
    Sphere,
    Particles,
}

impl GeometryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Cube => "cube",
            GeometryKind::Sphere => "sphere",
            GeometryKind::Particles => "particles",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown geometry kind `{0}` (expected cube, sphere or particles)")]
pub struct ParseGeometryKindError(pub String);

impl FromStr for GeometryKind {
    type Err = ParseGeometryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(GeometryKind::Cube),
            "sphere" => Ok(GeometryKind::Sphere),
            "particles" => Ok(GeometryKind::Particles),
            other => Err(ParseGeometryKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        for kind in [GeometryKind::Cube, GeometryKind::Sphere, GeometryKind::Particles] {
            assert_eq!(kind.as_str().parse::<GeometryKind>(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown() {
        let err = "torus".parse::<GeometryKind>().unwrap_err();
        assert_eq!(err, ParseGeometryKindError("torus".into()));
        assert!(err.to_string().contains("torus"));
    }
}
