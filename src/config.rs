use clap::{Args, ValueEnum};
use strum_macros::{Display, EnumString};

/// What to do when one task in a batch fails.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the batch on the first failing task.
    #[default]
    FailFast,
    /// Report failures inline and keep going.
    Isolate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum InputFormat {
    /// Pick from the file extension.
    #[default]
    Auto,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON array.
    #[default]
    Json,
    /// Indented JSON array.
    Pretty,
    /// Human readable table.
    Table,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BatchConfig {
    #[arg(long, value_enum, default_value_t = FailurePolicy::FailFast)]
    pub policy: FailurePolicy,

    /// Solve tasks one after another on the calling thread.
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Size of a dedicated worker pool. Uses the global rayon pool if unset.
    #[arg(long)]
    pub threads: Option<usize>,
}

impl BatchConfig {
    pub fn sequential() -> Self {
        Self {
            sequential: true,
            ..Default::default()
        }
    }
}
