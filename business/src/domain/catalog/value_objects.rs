use serde::{Deserialize, Serialize};

/// Unit the listed price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    #[default]
    Unit,
    Kg,
    G,
    L,
    Ml,
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceUnit::Unit => write!(f, "unit"),
            PriceUnit::Kg => write!(f, "kg"),
            PriceUnit::G => write!(f, "g"),
            PriceUnit::L => write!(f, "l"),
            PriceUnit::Ml => write!(f, "ml"),
        }
    }
}

impl std::str::FromStr for PriceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(PriceUnit::Unit),
            "kg" => Ok(PriceUnit::Kg),
            "g" => Ok(PriceUnit::G),
            "l" => Ok(PriceUnit::L),
            "ml" => Ok(PriceUnit::Ml),
            _ => Err(format!("Invalid price unit: {}", s)),
        }
    }
}
