use crate::error::GranskaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Pip,
    Npm,
    Cargo,
    Composer,
    Go,
    Maven,
}

impl Ecosystem {
    pub const ALL: &'static [Ecosystem] = &[
        Ecosystem::Pip,
        Ecosystem::Npm,
        Ecosystem::Cargo,
        Ecosystem::Composer,
        Ecosystem::Go,
        Ecosystem::Maven,
    ];
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Pip => write!(f, "pip"),
            Ecosystem::Npm => write!(f, "npm"),
            Ecosystem::Cargo => write!(f, "cargo"),
            Ecosystem::Composer => write!(f, "composer"),
            Ecosystem::Go => write!(f, "go"),
            Ecosystem::Maven => write!(f, "maven"),
        }
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = GranskaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pip" => Ok(Ecosystem::Pip),
            "npm" => Ok(Ecosystem::Npm),
            "cargo" => Ok(Ecosystem::Cargo),
            "composer" => Ok(Ecosystem::Composer),
            "go" => Ok(Ecosystem::Go),
            "maven" => Ok(Ecosystem::Maven),
            other => Err(GranskaError::UnknownEcosystem {
                ecosystem: other.to_string(),
                supported: Ecosystem::ALL
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
