use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
