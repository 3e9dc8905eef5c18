use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Where a parameter's values live.
///
/// Every `Parameter` carries its own placement, there's no process-wide device flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Cpu,
    Accelerator(usize),
}

impl Placement {
    /// Returns `true` if the values are directly addressable by the host.
    pub fn is_host(&self) -> bool {
        matches!(self, Placement::Cpu)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Cpu => write!(f, "cpu"),
            Placement::Accelerator(id) => write!(f, "accelerator:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_cpu() {
        assert_eq!(Placement::default(), Placement::Cpu);
        assert!(Placement::default().is_host());
        assert!(!Placement::Accelerator(0).is_host());
    }

    #[test]
    fn display() {
        assert_eq!(Placement::Cpu.to_string(), "cpu");
        assert_eq!(Placement::Accelerator(1).to_string(), "accelerator:1");
    }
}
