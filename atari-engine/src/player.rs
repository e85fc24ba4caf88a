use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stone::Stone;

/// A registered participant. The name is whatever the front end supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stone: Stone,
}

impl Player {
    pub fn new(name: impl Into<String>, stone: Stone) -> Self {
        Player {
            name: name.into(),
            stone,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.stone)
    }
}
