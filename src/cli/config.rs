//! Shared configuration types for CLI commands

use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide progress bars and spinners
    #[arg(long = "no-progress", action = ArgAction::SetFalse)]
    pub progress: bool,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Seed for the `index`-th independent run of a command.
    pub fn seed_for(&self, index: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        common: CommonConfig,
    }

    #[test]
    fn progress_is_on_unless_disabled() {
        let parsed = Wrapper::parse_from(["test"]);
        assert!(parsed.common.progress);
        assert_eq!(parsed.common.seed, None);

        let parsed = Wrapper::parse_from(["test", "--no-progress", "--seed", "7", "-v"]);
        assert!(!parsed.common.progress);
        assert!(parsed.common.verbose);
        assert_eq!(parsed.common.seed_for(2), Some(9));
    }
}
