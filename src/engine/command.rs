//! Abstract commands issued by a command source

use crate::state::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// The combined start/stop control
    Toggle,
    Reset,
    SwitchMode(Mode),
}

impl Command {
    /// Short name used for last-action tracking
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Toggle => "toggle",
            Command::Reset => "reset",
            Command::SwitchMode(_) => "switch-mode",
        }
    }
}
