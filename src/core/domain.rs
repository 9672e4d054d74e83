use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Configuration abstracts config options for the lending context
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub max_holds: usize,
    pub hold_days: i64,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            max_holds: 4,
            hold_days: 10,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
