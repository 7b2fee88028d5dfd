//! Shared test helpers: a provider that records every call it receives.

use std::sync::Mutex;

use hostlink_dcc::{DccProvider, DccResult, NodePath, Value};

/// One recorded invocation: operation name plus its arguments, stringified
/// in declaration order so tests can assert verbatim forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: String,
    pub args: Vec<String>,
}

/// Implements a small subset of the catalogue, recording arguments and
/// answering with canned values. Everything else keeps the `Unsupported`
/// defaults.
pub struct RecordingDcc {
    name: String,
    calls: Mutex<Vec<Call>>,
}

impl RecordingDcc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, args: Vec<String>) {
        self.calls.lock().unwrap().push(Call {
            operation: operation.to_string(),
            args,
        });
    }
}

impl DccProvider for RecordingDcc {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn create_node(&self, node_type: &str, node_name: Option<&str>) -> DccResult<NodePath> {
        self.record(
            "create_node",
            vec![node_type.to_string(), format!("{node_name:?}")],
        );
        let name = node_name.unwrap_or(node_type);
        Ok(NodePath::parse(name).expect("test node name should parse"))
    }

    fn selected_nodes(&self, full_path: bool) -> DccResult<Vec<NodePath>> {
        self.record("selected_nodes", vec![full_path.to_string()]);
        Ok(vec![
            NodePath::parse("|root|pCube1").unwrap(),
            NodePath::parse("|root|pSphere1").unwrap(),
        ])
    }

    fn attribute_value(&self, node: &NodePath, attribute_name: &str) -> DccResult<Value> {
        self.record(
            "attribute_value",
            vec![node.to_string(), attribute_name.to_string()],
        );
        Ok(Value::Float(42.5))
    }

    fn set_attribute_value(
        &self,
        node: &NodePath,
        attribute_name: &str,
        value: &Value,
    ) -> DccResult<()> {
        self.record(
            "set_attribute_value",
            vec![
                node.to_string(),
                attribute_name.to_string(),
                format!("{value:?}"),
            ],
        );
        Ok(())
    }

    fn set_keyframe(
        &self,
        node: &NodePath,
        attribute_name: Option<&str>,
        frame: Option<f32>,
    ) -> DccResult<()> {
        self.record(
            "set_keyframe",
            vec![
                node.to_string(),
                format!("{attribute_name:?}"),
                format!("{frame:?}"),
            ],
        );
        Ok(())
    }
}
