//! Fulfillment stations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical station that prepares drinks
///
/// Routing is derived from the drink's sweet flag: sweet drinks go to the
/// Süßkram station, everything else to the Schankwagen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    /// Beverage cart
    Schankwagen,
    /// Sweet drinks
    Suesskram,
}

impl Station {
    pub const ALL: [Station; 2] = [Station::Schankwagen, Station::Suesskram];

    /// Station responsible for a drink with the given category flag
    pub fn for_drink(is_sweet: bool) -> Self {
        if is_sweet {
            Self::Suesskram
        } else {
            Self::Schankwagen
        }
    }

    /// Whether this station prepares drinks with the given category flag
    pub fn serves(self, is_sweet: bool) -> bool {
        Self::for_drink(is_sweet) == self
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            Self::Schankwagen => "Schankwagen",
            Self::Suesskram => "Süßkram",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_by_category() {
        assert_eq!(Station::for_drink(true), Station::Suesskram);
        assert_eq!(Station::for_drink(false), Station::Schankwagen);

        assert!(Station::Suesskram.serves(true));
        assert!(!Station::Suesskram.serves(false));
        assert!(Station::Schankwagen.serves(false));
        assert!(!Station::Schankwagen.serves(true));
    }

    #[test]
    fn test_every_category_has_exactly_one_station() {
        for is_sweet in [true, false] {
            let serving = Station::ALL.iter().filter(|s| s.serves(is_sweet)).count();
            assert_eq!(serving, 1);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Station::Suesskram).unwrap(),
            "\"suesskram\""
        );
        assert_eq!(Station::Suesskram.to_string(), "Süßkram");
    }
}
