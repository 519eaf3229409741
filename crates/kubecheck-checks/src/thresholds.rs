use clap::{CommandFactory, Parser};
use kubecheck_core::{ConfigError, Status};

pub const DEFAULT_WARN: f64 = 0.9;
pub const DEFAULT_CRIT: f64 = 0.8;

#[derive(Parser, Clone, Debug, PartialEq)]
struct ThresholdArgs {
    /// Ratio of available to desired replicas to warn at
    #[arg(short, long, default_value_t = DEFAULT_WARN, allow_negative_numbers = true)]
    warn: f64,
    /// Ratio of available to desired replicas to alert critical at
    #[arg(short, long, default_value_t = DEFAULT_CRIT, allow_negative_numbers = true)]
    crit: f64,
}

/// Validated warn/critical ratios, fixed for the lifetime of a check.
///
/// `crit <= warn` is assumed but not enforced. Critical is tested first, so
/// an inverted pair never yields [`Status::Warn`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdConfig {
    warn: f64,
    crit: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            warn: DEFAULT_WARN,
            crit: DEFAULT_CRIT,
        }
    }
}

impl ThresholdConfig {
    pub fn new(warn: f64, crit: f64) -> Result<Self, ConfigError> {
        if !in_unit_range(warn) {
            return Err(ConfigError::WarnOutOfRange(warn));
        }
        if !in_unit_range(crit) {
            return Err(ConfigError::CritOutOfRange(crit));
        }
        Ok(Self { warn, crit })
    }

    /// Parse `--warn/-w` and `--crit/-c` from `argv` (program name first).
    pub fn from_argv(argv: &[String]) -> Result<Self, ConfigError> {
        let args = ThresholdArgs::try_parse_from(argv)?;
        Self::new(args.warn, args.crit)
    }

    /// Rendered option help for a check registered as `name`.
    pub fn flag_usage(name: &'static str) -> String {
        ThresholdArgs::command()
            .name(name)
            .render_help()
            .to_string()
    }

    pub fn warn(&self) -> f64 {
        self.warn
    }

    pub fn crit(&self) -> f64 {
        self.crit
    }

    /// Both bounds are inclusive on the more severe side.
    pub fn classify(&self, level: f64) -> Status {
        if level <= self.crit {
            Status::Critical
        } else if level <= self.warn {
            Status::Warn
        } else {
            Status::Ok
        }
    }
}

// NaN fails both comparisons and is rejected.
fn in_unit_range(v: f64) -> bool {
    v > 0.0 && v <= 1.0
}
