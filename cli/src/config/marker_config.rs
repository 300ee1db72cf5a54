use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::{Cell, Side};

/// Symbols used when drawing the board.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct MarkerConfig {
    pub user: char,
    pub agent: char,
    pub empty: char,
}

impl MarkerConfig {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(Side::User) => self.user,
            Cell::Occupied(Side::Agent) => self.agent,
        }
    }
}

impl Validate for MarkerConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, marker) in [("user", self.user), ("agent", self.agent), ("empty", self.empty)] {
            if marker.is_control() {
                return Err(format!("{} marker must be printable", name));
            }
        }
        if self.user == self.agent || self.user == self.empty || self.agent == self.empty {
            return Err(format!(
                "markers must be distinct, got user '{}', agent '{}', empty '{}'",
                self.user, self.agent, self.empty
            ));
        }
        Ok(())
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            user: 'X',
            agent: 'O',
            empty: ' ',
        }
    }
}
