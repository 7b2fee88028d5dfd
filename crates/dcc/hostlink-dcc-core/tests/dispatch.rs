//! End-to-end dispatch behavior: resolve through the registry, forward
//! verbatim, surface unsupported operations, degrade to the fallback.

mod common;

use std::sync::Arc;

use common::{Call, RecordingDcc};
use hostlink_dcc::{
    keys, DccContext, DccHandle, DccProvider, NodePath, UnknownDcc, Value,
};

#[test]
fn registered_provider_is_resolved_identically() {
    let recording: Arc<RecordingDcc> = Arc::new(RecordingDcc::new("maya"));
    let ctx = DccContext::new().with_dcc(recording.clone());

    let resolved = ctx.dcc();
    let registered: Arc<dyn DccProvider> = recording;
    assert!(Arc::ptr_eq(&resolved, &registered));
}

#[test]
fn dispatch_forwards_arguments_verbatim() {
    let recording = Arc::new(RecordingDcc::new("maya"));
    let ctx = DccContext::new().with_dcc(recording.clone());
    let dcc = ctx.dcc();

    let created = dcc.create_node("transform", Some("pCube1")).unwrap();
    assert_eq!(created.to_string(), "pCube1");

    let node = NodePath::parse("|root|pCube1.translateX").unwrap();
    dcc.set_attribute_value(&node.node(), "translateX", &Value::Float(2.5))
        .unwrap();
    let read = dcc.attribute_value(&node.node(), "translateX").unwrap();
    assert_eq!(read, Value::Float(42.5));

    let calls = recording.calls();
    assert_eq!(
        calls[0],
        Call {
            operation: "create_node".into(),
            args: vec!["transform".into(), "Some(\"pCube1\")".into()],
        }
    );
    assert_eq!(
        calls[1],
        Call {
            operation: "set_attribute_value".into(),
            args: vec![
                "|root|pCube1".into(),
                "translateX".into(),
                "Float(2.5)".into(),
            ],
        }
    );
    assert_eq!(calls[2].operation, "attribute_value");
}

#[test]
fn reregistration_replaces_the_active_provider() {
    let first = Arc::new(RecordingDcc::new("first"));
    let second = Arc::new(RecordingDcc::new("second"));

    let mut ctx = DccContext::new();
    ctx.set_dcc(first);
    ctx.set_dcc(second);

    assert_eq!(ctx.dcc().name(), "second");
}

#[test]
fn unimplemented_operation_is_an_explicit_failure() {
    let recording = Arc::new(RecordingDcc::new("maya"));
    let ctx = DccContext::new().with_dcc(recording.clone());
    let dcc = ctx.dcc();

    let node = NodePath::parse("pCube1").unwrap();
    let err = dcc.delete_node(&node).unwrap_err();
    assert!(err.is_unsupported());
    assert!(err.to_string().contains("delete_node"));
    // The failed call never reached the recording layer.
    assert!(recording.calls().is_empty());
}

#[test]
fn absent_provider_falls_back_to_unknown() {
    let ctx = DccContext::new();
    let dcc = ctx.dcc();

    assert_eq!(dcc.name(), "unknown");
    // Graceful defaults answer; real scene operations stay unsupported.
    dcc.warning("running without a host").unwrap();
    assert!(dcc
        .set_keyframe(&NodePath::parse("pCube1").unwrap(), None, None)
        .unwrap_err()
        .is_unsupported());
}

#[test]
fn dead_weak_registration_degenerates_to_fallback() {
    let recording: Arc<dyn DccProvider> = Arc::new(RecordingDcc::new("houdini"));
    let handle = Arc::new(DccHandle(recording));

    let mut ctx = DccContext::new();
    ctx.registry_mut().register_weak(keys::DCC, &handle);
    assert_eq!(ctx.dcc().name(), "houdini");

    drop(handle);
    assert_eq!(ctx.dcc().name(), "unknown");
}

#[test]
fn unregistering_the_dcc_key_restores_the_fallback() {
    let mut ctx = DccContext::new();
    ctx.set_dcc(Arc::new(RecordingDcc::new("nuke")));
    assert_eq!(ctx.dcc().name(), "nuke");

    ctx.registry_mut().unregister(keys::DCC);
    assert_eq!(ctx.dcc().name(), "unknown");
}

#[test]
fn fallback_progress_bar_counts() {
    let ctx = DccContext::new();
    let mut bar = ctx.dcc().progress_bar().unwrap();
    bar.set_count(5);
    bar.inc(2);
    bar.inc(1);
    assert_eq!(bar.count(), 5);
    assert!(!bar.break_signaled());
}

#[test]
fn unknown_dcc_registered_explicitly_behaves_like_fallback() {
    let ctx = DccContext::new().with_dcc(Arc::new(UnknownDcc::new()));
    assert_eq!(ctx.dcc().name(), "unknown");
    assert!(ctx.dcc().is_batch().unwrap());
}
