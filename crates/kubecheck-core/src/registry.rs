use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::check::Check;
use crate::config::CheckConfig;
use crate::error::{ConfigError, RegistryError};
use crate::resource::ResourceKind;
use crate::result::CheckUsage;

/// Builds a check from its configuration.
pub type CheckFactory = fn(CheckConfig) -> Result<Box<dyn Check>, ConfigError>;

/// Describes a check without constructing it.
pub type UsageFn = fn() -> CheckUsage;

struct Registration {
    factory: CheckFactory,
    usage: UsageFn,
    kinds: Vec<ResourceKind>,
}

/// Name-to-factory mapping, built once at startup and passed to whatever
/// assembles the active check set.
#[derive(Default)]
pub struct Registry {
    checks: BTreeMap<String, Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &str,
        factory: CheckFactory,
        usage: UsageFn,
        kinds: &[ResourceKind],
    ) -> Result<(), RegistryError> {
        if self.checks.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        debug!(check = name, ?kinds, "registered check");
        self.checks.insert(
            name.to_string(),
            Registration {
                factory,
                usage,
                kinds: kinds.to_vec(),
            },
        );
        Ok(())
    }

    /// Instantiate the check named by `config.name`.
    ///
    /// Option errors carry the instance id; [`Registry::usage`] still works
    /// for the same name so help can be printed.
    pub fn build(&self, config: CheckConfig) -> Result<Box<dyn Check>, RegistryError> {
        let registration = self.lookup(&config.name)?;
        let id = config.id.clone();
        (registration.factory)(config).map_err(|source| {
            warn!(check_id = %id, error = %source, "rejected check configuration");
            RegistryError::Config { id, source }
        })
    }

    pub fn usage(&self, name: &str) -> Result<CheckUsage, RegistryError> {
        Ok((self.lookup(name)?.usage)())
    }

    pub fn kinds(&self, name: &str) -> Result<&[ResourceKind], RegistryError> {
        Ok(&self.lookup(name)?.kinds)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    /// Names of checks that observe `kind`, in name order.
    pub fn checks_for(&self, kind: ResourceKind) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|(_, r)| r.kinds.contains(&kind))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&Registration, RegistryError> {
        self.checks
            .get(name)
            .ok_or_else(|| RegistryError::UnknownCheck(name.to_string()))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.checks.iter().map(|(name, r)| (name, &r.kinds)))
            .finish()
    }
}
