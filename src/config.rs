use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Sfmt;

/// How a generator gets seeded.
///
/// Deserializes from `{"seed": 1234}`, `{"key": [1, 2, 3]}` or `"entropy"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    Seed(u32),
    Key(Vec<u32>),
    #[default]
    Entropy,
}

impl SeedSource {
    pub fn build(&self) -> Result<Sfmt> {
        match self {
            SeedSource::Seed(seed) => Ok(Sfmt::from_seed(*seed)),
            SeedSource::Key(key) => Sfmt::from_key(key),
            SeedSource::Entropy => Ok(Sfmt::new()),
        }
    }
}
