use serde::{Deserialize, Serialize};

pub const DEFAULT_CALORIES: f64 = 2000.0;
pub const DEFAULT_PROTEIN: f64 = 150.0;

/// Daily nutrition targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            protein: DEFAULT_PROTEIN,
        }
    }
}
