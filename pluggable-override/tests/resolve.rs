use pluggable_override::*;
use pluggable_settings::{EnvSettings, LayeredSettings, Settings, SettingsError};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn probed(calls: &Arc<AtomicUsize>) -> PluggableOverride<u32, u32> {
    let calls = Arc::clone(calls);
    PluggableOverride::new("SCORE_IMPL", move |n: &u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        *n
    })
}

fn curve(next: Next<'_, u32, u32>, _n: &u32) -> u32 {
    (next.run() + 10).min(100)
}

fn registry() -> OverrideRegistry {
    let mut registry = OverrideRegistry::new();
    registry.register("grading.scores.curve", curve).unwrap();
    registry
}

fn env_with(value: serde_json::Value) -> OverrideEnv {
    OverrideEnv::new(Settings::new().with("SCORE_IMPL", value), registry())
}

// --- Configuration errors, raised before any side effect ---

#[test]
fn unknown_module_fails_before_base_runs() {
    let calls = Arc::new(AtomicUsize::new(0));
    let score = probed(&calls);
    let err = score.call(&env_with(json!("grading.missing.curve")), &50).unwrap_err();

    match err {
        OverrideError::UnknownModule { module, name } => {
            assert_eq!(module, "grading.missing");
            assert_eq!(name, "grading.missing.curve");
        }
        other => panic!("expected UnknownModule, got: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_function_fails_before_base_runs() {
    let calls = Arc::new(AtomicUsize::new(0));
    let score = probed(&calls);
    let err = score.call(&env_with(json!("grading.scores.boost")), &50).unwrap_err();

    assert!(matches!(err, OverrideError::UnknownFunction { .. }));
    assert!(err.to_string().contains("boost"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn malformed_name_fails() {
    let calls = Arc::new(AtomicUsize::new(0));
    let score = probed(&calls);
    let err = score.call(&env_with(json!("curve")), &50).unwrap_err();
    assert!(matches!(err, OverrideError::MalformedName { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn bad_name_late_in_chain_prevents_earlier_overrides() {
    let entered = Arc::new(AtomicUsize::new(0));
    let e = Arc::clone(&entered);
    let mut registry = registry();
    registry
        .register::<u32, u32, _>("grading.scores.spy", move |next, _n| {
            e.fetch_add(1, Ordering::SeqCst);
            next.run()
        })
        .unwrap();
    let env = OverrideEnv::new(
        Settings::new().with("SCORE_IMPL", json!(["grading.scores.spy", "nowhere.fn"])),
        registry,
    );
    let calls = Arc::new(AtomicUsize::new(0));

    let err = probed(&calls).call(&env, &1).unwrap_err();
    assert!(matches!(err, OverrideError::UnknownModule { .. }));
    assert_eq!(entered.load(Ordering::SeqCst), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn signature_mismatch_is_a_configuration_error() {
    let label = PluggableOverride::new("SCORE_IMPL", |n: &u32| n.to_string());
    let err = label.call(&env_with(json!("grading.scores.curve")), &1).unwrap_err();
    assert!(matches!(err, OverrideError::SignatureMismatch { .. }));
    assert!(err.to_string().contains("SCORE_IMPL"));
}

#[test]
fn invalid_setting_value_is_a_configuration_error() {
    let calls = Arc::new(AtomicUsize::new(0));
    let err = probed(&calls).call(&env_with(json!(42)), &1).unwrap_err();
    assert!(matches!(
        err,
        OverrideError::Settings(SettingsError::InvalidSetting { .. })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn resolve_validates_without_invoking() {
    let calls = Arc::new(AtomicUsize::new(0));
    let score = probed(&calls);
    assert!(score.resolve(&env_with(json!("grading.scores.curve"))).is_ok());
    assert!(score.resolve(&env_with(json!("grading.scores.nope"))).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// --- Settings sources ---

#[test]
fn resolves_through_layered_environment() {
    let calls = Arc::new(AtomicUsize::new(0));
    let score = probed(&calls);
    let settings = LayeredSettings::new()
        .layer(EnvSettings::from_vars(
            "LMS_",
            [("LMS_SCORE_IMPL", "grading.scores.curve")],
        ))
        .layer(Settings::new().with("SCORE_IMPL", json!(null)));
    let env = OverrideEnv::new(settings, registry());

    assert_eq!(score.call(&env, &95).unwrap(), 100);
    assert_eq!(score.call(&env, &50).unwrap(), 60);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn free_function_resolver_matches_env() {
    let settings = Settings::new().with("SCORE_IMPL", json!(["grading.scores.curve"]));
    let registry = registry();
    let overrides = resolve_overrides::<u32, u32>(&settings, &registry, "SCORE_IMPL").unwrap();
    assert_eq!(overrides.len(), 1);
    let none = resolve_overrides::<u32, u32>(&settings, &registry, "OTHER_IMPL").unwrap();
    assert!(none.is_empty());
}
