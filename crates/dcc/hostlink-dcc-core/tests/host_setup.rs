//! Fixture-driven host classification: every shipped host setup fixture
//! must classify deterministically.

use hostlink_dcc::{classify, DccContext, HostApp, HostSetup};
use hostlink_test_fixtures::hosts;

fn setup(name: &str) -> HostSetup {
    let raw = hosts::json(name).expect("fixture should load");
    HostSetup::from_json_str(&raw).expect("fixture should parse")
}

#[test]
fn fixtures_classify_to_their_host() {
    let cases = [
        ("maya", HostApp::Maya),
        ("max", HostApp::Max),
        ("houdini", HostApp::Houdini),
        ("nuke", HostApp::Nuke),
        ("mobu", HostApp::MotionBuilder),
        ("standalone", HostApp::Unknown),
    ];
    for (name, expected) in cases {
        let env = setup(name).env();
        assert_eq!(classify(&env), expected, "fixture {name}");
    }
}

#[test]
fn ambiguous_fixture_resolves_by_priority() {
    // Exposes both `hou` and `cmds`; Maya outranks Houdini.
    let env = setup("ambiguous").env();
    assert_eq!(classify(&env), HostApp::Maya);

    let ctx = DccContext::with_env(env);
    assert!(ctx.is_maya());
    assert!(ctx.is_houdini());
    assert_eq!(ctx.host(), HostApp::Maya);
}

#[test]
fn standalone_fixture_has_no_host() {
    let ctx = DccContext::from_setup(&setup("standalone"));
    assert!(ctx.is_standalone());
    assert_eq!(ctx.dcc().name(), "unknown");
}

#[test]
fn classification_is_stable_across_probes() {
    let ctx = DccContext::from_setup(&setup("max"));
    for _ in 0..3 {
        assert_eq!(ctx.host(), HostApp::Max);
    }
    assert!(ctx.is_max());
    assert!(!ctx.is_maya());
}

#[test]
fn every_fixture_parses_as_a_setup() {
    for name in hosts::keys() {
        let parsed = setup(&name);
        // env() must never panic, whatever the fixture contents.
        let _ = parsed.env();
    }
}
