use anyhow::{Context as _, Result, bail};
use kubecheck_core::{CheckConfig, CheckResult, Registry, Resource};
use tracing::info;

/// One line per registered check: name and observed kinds.
pub fn list(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    for name in registry.names() {
        let kinds: Vec<&str> = registry.kinds(name)?.iter().map(|k| k.as_str()).collect();
        out.push_str(&format!("{name}\t{}\n", kinds.join(",")));
    }
    Ok(out)
}

pub fn usage(registry: &Registry, name: &str) -> Result<String> {
    Ok(registry.usage(name)?.to_string())
}

/// Build the configured check, feed it the manifest and evaluate once.
///
/// The manifest may be YAML or JSON. Its kind must be one the check
/// registered for.
pub fn evaluate(registry: &Registry, config: CheckConfig, manifest: &str) -> Result<CheckResult> {
    let value: serde_json::Value =
        serde_yaml::from_str(manifest).context("failed to parse resource manifest")?;
    let resource = Resource::from_manifest(value)?;

    let kinds = registry.kinds(&config.name)?;
    if !kinds.contains(&resource.kind()) {
        bail!(
            "check {} does not observe {} resources",
            config.name,
            resource.kind()
        );
    }

    let id = config.id.clone();
    let mut check = registry.build(config)?;
    info!(
        check_id = %id,
        kind = %resource.kind(),
        name = %resource.name(),
        namespace = resource.namespace().as_deref().unwrap_or("default"),
        "evaluating resource"
    );
    check.update(resource)?;
    let res = check.execute()?;
    info!(check_id = %id, status = %res.status, "check finished");
    Ok(res)
}

/// JSON schema of the result document printed by `run`.
pub fn schema() -> Result<String> {
    let schema = schemars::schema_for!(CheckResult);
    Ok(serde_json::to_string_pretty(&schema)?)
}
