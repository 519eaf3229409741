use std::collections::BTreeMap;

use kubecheck_core::*;

// ---------------------------------------------------------------------------
// Status ordering
// ---------------------------------------------------------------------------

#[test]
fn status_orders_by_severity() {
    assert!(Status::Ok < Status::Warn);
    assert!(Status::Warn < Status::Critical);
}

#[test]
fn worst_picks_most_severe() {
    assert_eq!(Status::worst([Status::Ok, Status::Critical, Status::Warn]), Status::Critical);
    assert_eq!(Status::worst([Status::Ok, Status::Warn]), Status::Warn);
    assert_eq!(Status::worst(Vec::new()), Status::Ok);
}

#[test]
fn exit_codes_follow_plugin_convention() {
    assert_eq!(Status::Ok.exit_code(), 0);
    assert_eq!(Status::Warn.exit_code(), 1);
    assert_eq!(Status::Critical.exit_code(), 2);
}

#[test]
fn status_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), "\"OK\"");
    assert_eq!(serde_json::to_string(&Status::Warn).unwrap(), "\"WARN\"");
    assert_eq!(serde_json::to_string(&Status::Critical).unwrap(), "\"CRITICAL\"");
    assert_eq!(Status::Critical.to_string(), "CRITICAL");
}

// ---------------------------------------------------------------------------
// CheckResult
// ---------------------------------------------------------------------------

#[test]
fn from_config_copies_identity() {
    let config = CheckConfig::new("web", "deployment_status").with_tag("team", "platform");
    let res = CheckResult::from_config(&config);

    assert_eq!(res.id, "web");
    assert_eq!(res.name, "deployment_status");
    assert_eq!(res.tags.get("team").map(String::as_str), Some("platform"));
    assert_eq!(res.status, Status::Ok);
    assert!(res.output.is_empty());
}

#[test]
fn result_serializes_camel_case_without_empty_tags() {
    let res = CheckResult {
        id: "web".into(),
        name: "deployment_status".into(),
        tags: BTreeMap::new(),
        status: Status::Warn,
        output: "{}".into(),
    };
    let value = serde_json::to_value(&res).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "web",
            "name": "deployment_status",
            "status": "WARN",
            "output": "{}"
        })
    );
}

// ---------------------------------------------------------------------------
// render_output
// ---------------------------------------------------------------------------

#[test]
fn render_output_uses_two_space_indent() {
    let out = render_output(&serde_json::json!({"replicas": 3})).unwrap();
    assert_eq!(out, "{\n  \"replicas\": 3\n}");
}

#[test]
fn render_output_surfaces_encode_failure() {
    // JSON object keys must be strings.
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "x");
    let err = render_output(&bad).unwrap_err();
    assert!(matches!(err, CheckError::Encode(_)));
}

#[test]
fn usage_display_joins_description_and_flags() {
    let usage = CheckUsage {
        description: "Checks things".into(),
        flags: "  -w, --warn <WARN>".into(),
    };
    assert_eq!(usage.to_string(), "Checks things\n\n  -w, --warn <WARN>");
}
