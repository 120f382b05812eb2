//! Engine options for the dama text driver
//!
//! Options start from their defaults, can be seeded from the command line and
//! changed at run time with `setoption name <Name> value <value>`.

use crate::error::OptionError;
use crate::rules::Rules;

/// Complete driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Allow men to open a capture backwards
    pub backward_captures: bool,

    /// Print the diagram after every accepted move
    pub show_board: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            backward_captures: false,
            show_board: false,
        }
    }
}

impl EngineOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> Rules {
        Rules {
            backward_captures: self.backward_captures,
        }
    }

    /// Set option value
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        match name {
            "BackwardCaptures" => self.backward_captures = parse_check(name, value)?,
            "ShowBoard" => self.show_board = parse_check(name, value)?,
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        Ok(())
    }
}

fn parse_check(name: &str, value: Option<&str>) -> Result<bool, OptionError> {
    let value = value.ok_or_else(|| OptionError::MissingValue {
        name: name.to_string(),
    })?;
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
