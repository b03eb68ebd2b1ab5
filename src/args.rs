use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use std::fmt;

// Global static variable to store parsed CLI arguments
pub static ARGS: Lazy<CliArgs> = Lazy::new(|| CliArgs::parse());

/// CI environment whose variable names carry the report configuration.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum EnvProfile {
    Drone,
    Woodpecker,
}

impl fmt::Display for EnvProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EnvProfile::Drone => "drone",
                EnvProfile::Woodpecker => "woodpecker",
            }
        )
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, name = "Coverage upload script")]
pub struct CliArgs {
    /// CI environment to read the report configuration from
    #[arg(short = 'p', long, value_enum, default_value_t = EnvProfile::Drone)]
    pub profile: EnvProfile,

    /// Verbose output
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
