//! The abstract operation catalogue every host backend answers.
//!
//! `DccProvider` is a deliberately flat surface: one method per abstract
//! operation, grouped the way host APIs group them (scene, nodes, naming,
//! namespaces, selection, transforms, attributes, connections, materials,
//! cameras, animation). Every method defaults to
//! [`DccError::Unsupported`](crate::DccError::Unsupported), so a backend
//! implements exactly the subset its host exposes and callers get an
//! explicit error, never a silent stand-in, for the rest.
//!
//! Backends live outside this crate; the only implementation shipped here is
//! [`UnknownDcc`](crate::UnknownDcc), the graceful fallback for running
//! outside any host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hostlink_api_core::{NodePath, Value, ValueKind};

use crate::error::{unsupported, DccResult};
use crate::hosts::HostApp;
use crate::progress::ProgressBar;

/// Coordinate space qualifier for transform operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    World,
    Object,
}

/// Abstract DCC operation surface. All calls are synchronous and expected to
/// complete within the hosting application's frame.
pub trait DccProvider: Send + Sync {
    // ---- General ----

    /// Name of the host application this provider drives.
    fn name(&self) -> String;

    /// Host identity derived from [`name`](Self::name); backends whose name
    /// is not a known host should override this.
    fn host(&self) -> HostApp {
        HostApp::from_name(&self.name())
    }

    fn version(&self) -> DccResult<String> {
        unsupported("version")
    }

    fn version_name(&self) -> DccResult<String> {
        unsupported("version_name")
    }

    /// Scene file extensions the host reads and writes natively.
    fn file_extensions(&self) -> DccResult<Vec<String>> {
        unsupported("file_extensions")
    }

    /// Whether the host is running without UI (batch / headless mode).
    fn is_batch(&self) -> DccResult<bool> {
        unsupported("is_batch")
    }

    /// Queue `task` on the host's idle loop. Hosts without one may run it
    /// immediately.
    fn execute_deferred(&self, task: Box<dyn FnOnce() + Send>) -> DccResult<()> {
        let _ = task;
        unsupported("execute_deferred")
    }

    fn enable_undo(&self) -> DccResult<()> {
        unsupported("enable_undo")
    }

    fn disable_undo(&self) -> DccResult<()> {
        unsupported("disable_undo")
    }

    fn open_undo_chunk(&self, name: &str) -> DccResult<()> {
        let _ = name;
        unsupported("open_undo_chunk")
    }

    fn close_undo_chunk(&self) -> DccResult<()> {
        unsupported("close_undo_chunk")
    }

    fn is_component_mode(&self) -> DccResult<bool> {
        unsupported("is_component_mode")
    }

    fn enable_component_selection(&self) -> DccResult<()> {
        unsupported("enable_component_selection")
    }

    fn is_plugin_loaded(&self, plugin_name: &str) -> DccResult<bool> {
        let _ = plugin_name;
        unsupported("is_plugin_loaded")
    }

    fn load_plugin(&self, plugin_path: &str, quiet: bool) -> DccResult<()> {
        let _ = (plugin_path, quiet);
        unsupported("load_plugin")
    }

    fn unload_plugin(&self, plugin_path: &str) -> DccResult<()> {
        let _ = plugin_path;
        unsupported("unload_plugin")
    }

    fn set_workspace(&self, workspace_path: &Path) -> DccResult<()> {
        let _ = workspace_path;
        unsupported("set_workspace")
    }

    /// Show a warning message in the host UI.
    fn warning(&self, message: &str) -> DccResult<()> {
        let _ = message;
        unsupported("warning")
    }

    /// Show an error message in the host UI.
    fn error(&self, message: &str) -> DccResult<()> {
        let _ = message;
        unsupported("error")
    }

    fn fit_view(&self, animation: bool) -> DccResult<()> {
        let _ = animation;
        unsupported("fit_view")
    }

    fn refresh_viewport(&self) -> DccResult<()> {
        unsupported("refresh_viewport")
    }

    fn focus(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("focus")
    }

    /// Name of the scene up axis ("y" or "z").
    fn up_axis_name(&self) -> DccResult<String> {
        unsupported("up_axis_name")
    }

    // ---- Scene ----

    fn new_scene(&self, force: bool) -> DccResult<()> {
        let _ = force;
        unsupported("new_scene")
    }

    fn open_scene(&self, file_path: &Path, force: bool) -> DccResult<()> {
        let _ = (file_path, force);
        unsupported("open_scene")
    }

    fn import_scene(&self, file_path: &Path, force: bool) -> DccResult<()> {
        let _ = (file_path, force);
        unsupported("import_scene")
    }

    fn reference_scene(&self, file_path: &Path, force: bool) -> DccResult<()> {
        let _ = (file_path, force);
        unsupported("reference_scene")
    }

    /// Save the current scene; returns whether a save actually happened.
    fn save_scene(&self, force: bool) -> DccResult<bool> {
        let _ = force;
        unsupported("save_scene")
    }

    fn export_selection(&self, export_path: &Path, force: bool) -> DccResult<()> {
        let _ = (export_path, force);
        unsupported("export_selection")
    }

    /// Path of the current scene file, `None` for an unsaved scene.
    fn scene_name(&self) -> DccResult<Option<PathBuf>> {
        unsupported("scene_name")
    }

    fn scene_is_modified(&self) -> DccResult<bool> {
        unsupported("scene_is_modified")
    }

    fn all_scene_nodes(&self, full_path: bool) -> DccResult<Vec<NodePath>> {
        let _ = full_path;
        unsupported("all_scene_nodes")
    }

    /// Nodes the host creates in every scene (default cameras etc).
    fn default_scene_nodes(&self, full_path: bool) -> DccResult<Vec<NodePath>> {
        let _ = full_path;
        unsupported("default_scene_nodes")
    }

    // ---- Nodes ----

    fn node_exists(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_exists")
    }

    fn node_type(&self, node: &NodePath) -> DccResult<String> {
        let _ = node;
        unsupported("node_type")
    }

    fn check_node_type(
        &self,
        node: &NodePath,
        node_type: &str,
        check_sub_types: bool,
    ) -> DccResult<bool> {
        let _ = (node, node_type, check_sub_types);
        unsupported("check_node_type")
    }

    /// Create a node of the given type; the host picks a name when none is
    /// given. Returns the path of the created node.
    fn create_node(&self, node_type: &str, node_name: Option<&str>) -> DccResult<NodePath> {
        let _ = (node_type, node_name);
        unsupported("create_node")
    }

    fn delete_node(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("delete_node")
    }

    /// Rename a node; returns its new path.
    fn rename_node(&self, node: &NodePath, new_name: &str) -> DccResult<NodePath> {
        let _ = (node, new_name);
        unsupported("rename_node")
    }

    fn duplicate_node(&self, node: &NodePath, new_name: Option<&str>) -> DccResult<NodePath> {
        let _ = (node, new_name);
        unsupported("duplicate_node")
    }

    fn root_node(&self) -> DccResult<Option<NodePath>> {
        unsupported("root_node")
    }

    fn find_node_by_name(&self, name: &str) -> DccResult<Option<NodePath>> {
        let _ = name;
        unsupported("find_node_by_name")
    }

    fn find_node_by_id(&self, unique_id: &str, full_path: bool) -> DccResult<Option<NodePath>> {
        let _ = (unique_id, full_path);
        unsupported("find_node_by_id")
    }

    fn show_node(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("show_node")
    }

    fn hide_node(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("hide_node")
    }

    fn node_is_hidden(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_hidden")
    }

    fn node_is_visible(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_visible")
    }

    fn node_is_transform(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_transform")
    }

    fn node_is_joint(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_joint")
    }

    fn node_is_locked(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_locked")
    }

    fn node_is_referenced(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("node_is_referenced")
    }

    /// File the referenced node comes from, `None` for local nodes.
    fn node_reference_path(
        &self,
        node: &NodePath,
        without_copy_number: bool,
    ) -> DccResult<Option<PathBuf>> {
        let _ = (node, without_copy_number);
        unsupported("node_reference_path")
    }

    /// Display color of the node as linear RGBA.
    fn node_color(&self, node: &NodePath) -> DccResult<[f32; 4]> {
        let _ = node;
        unsupported("node_color")
    }

    fn set_node_color(&self, node: &NodePath, color: [f32; 4]) -> DccResult<()> {
        let _ = (node, color);
        unsupported("set_node_color")
    }

    fn node_parent(&self, node: &NodePath, full_path: bool) -> DccResult<Option<NodePath>> {
        let _ = (node, full_path);
        unsupported("node_parent")
    }

    fn node_children(
        &self,
        node: &NodePath,
        all_hierarchy: bool,
        full_path: bool,
    ) -> DccResult<Vec<NodePath>> {
        let _ = (node, all_hierarchy, full_path);
        unsupported("node_children")
    }

    /// Topmost transform above the node.
    fn node_root(&self, node: &NodePath, full_path: bool) -> DccResult<NodePath> {
        let _ = (node, full_path);
        unsupported("node_root")
    }

    fn set_parent(&self, node: &NodePath, parent: &NodePath) -> DccResult<()> {
        let _ = (node, parent);
        unsupported("set_parent")
    }

    fn set_parent_to_world(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("set_parent_to_world")
    }

    fn list_nodes(
        &self,
        node_name: Option<&str>,
        node_type: Option<&str>,
        full_path: bool,
    ) -> DccResult<Vec<NodePath>> {
        let _ = (node_name, node_type, full_path);
        unsupported("list_nodes")
    }

    /// Node type names matching a type-class string ("shape", "transform").
    fn list_node_types(&self, type_string: &str) -> DccResult<Vec<String>> {
        let _ = type_string;
        unsupported("list_node_types")
    }

    fn create_locator(&self, name: &str) -> DccResult<NodePath> {
        let _ = name;
        unsupported("create_locator")
    }

    fn create_empty_group(&self, name: &str, parent: Option<&NodePath>) -> DccResult<NodePath> {
        let _ = (name, parent);
        unsupported("create_empty_group")
    }

    /// Group `node` under a new transform called `name`.
    fn group_node(
        &self,
        node: &NodePath,
        name: &str,
        parent: Option<&NodePath>,
    ) -> DccResult<NodePath> {
        let _ = (node, name, parent);
        unsupported("group_node")
    }

    // ---- Naming ----

    fn node_short_name(&self, node: &NodePath) -> DccResult<String> {
        let _ = node;
        unsupported("node_short_name")
    }

    fn node_long_name(&self, node: &NodePath) -> DccResult<NodePath> {
        let _ = node;
        unsupported("node_long_name")
    }

    /// A name derived from `base_name` that no scene node currently uses.
    fn find_unique_name(&self, base_name: &str) -> DccResult<String> {
        let _ = base_name;
        unsupported("find_unique_name")
    }

    fn add_name_prefix(&self, node: &NodePath, prefix: &str) -> DccResult<NodePath> {
        let _ = (node, prefix);
        unsupported("add_name_prefix")
    }

    fn add_name_suffix(&self, node: &NodePath, suffix: &str) -> DccResult<NodePath> {
        let _ = (node, suffix);
        unsupported("add_name_suffix")
    }

    fn remove_name_prefix(&self, node: &NodePath) -> DccResult<NodePath> {
        let _ = node;
        unsupported("remove_name_prefix")
    }

    fn remove_name_suffix(&self, node: &NodePath) -> DccResult<NodePath> {
        let _ = node;
        unsupported("remove_name_suffix")
    }

    /// Mirrored counterpart of a sided name ("arm_L" -> "arm_R").
    fn mirror_name(&self, name: &str) -> DccResult<String> {
        let _ = name;
        unsupported("mirror_name")
    }

    // ---- Namespaces ----

    fn namespace_separator(&self) -> DccResult<String> {
        unsupported("namespace_separator")
    }

    fn list_namespaces(&self) -> DccResult<Vec<String>> {
        unsupported("list_namespaces")
    }

    fn namespace_exists(&self, name: &str) -> DccResult<bool> {
        let _ = name;
        unsupported("namespace_exists")
    }

    /// A namespace derived from `name` that does not exist in the scene yet.
    fn unique_namespace(&self, name: &str) -> DccResult<String> {
        let _ = name;
        unsupported("unique_namespace")
    }

    fn node_namespace(&self, node: &NodePath) -> DccResult<Option<String>> {
        let _ = node;
        unsupported("node_namespace")
    }

    fn all_nodes_in_namespace(&self, namespace: &str) -> DccResult<Vec<NodePath>> {
        let _ = namespace;
        unsupported("all_nodes_in_namespace")
    }

    fn rename_namespace(&self, current_namespace: &str, new_namespace: &str) -> DccResult<()> {
        let _ = (current_namespace, new_namespace);
        unsupported("rename_namespace")
    }

    fn assign_node_namespace(
        &self,
        node: &NodePath,
        namespace: &str,
        force_create: bool,
    ) -> DccResult<()> {
        let _ = (node, namespace, force_create);
        unsupported("assign_node_namespace")
    }

    fn node_name_without_namespace(&self, node: &NodePath) -> DccResult<String> {
        let _ = node;
        unsupported("node_name_without_namespace")
    }

    // ---- Selection ----

    fn selected_nodes(&self, full_path: bool) -> DccResult<Vec<NodePath>> {
        let _ = full_path;
        unsupported("selected_nodes")
    }

    fn selected_nodes_of_type(&self, node_type: &str, full_path: bool) -> DccResult<Vec<NodePath>> {
        let _ = (node_type, full_path);
        unsupported("selected_nodes_of_type")
    }

    fn select_node(&self, node: &NodePath, replace_selection: bool) -> DccResult<()> {
        let _ = (node, replace_selection);
        unsupported("select_node")
    }

    fn deselect_node(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("deselect_node")
    }

    fn clear_selection(&self) -> DccResult<()> {
        unsupported("clear_selection")
    }

    /// Select the whole hierarchy under `root` (current selection when
    /// `root` is `None`).
    fn select_hierarchy(&self, root: Option<&NodePath>, add: bool) -> DccResult<()> {
        let _ = (root, add);
        unsupported("select_hierarchy")
    }

    // ---- Transforms ----

    /// World matrix, column-major.
    fn node_world_matrix(&self, node: &NodePath) -> DccResult<[f32; 16]> {
        let _ = node;
        unsupported("node_world_matrix")
    }

    fn set_node_world_matrix(&self, node: &NodePath, matrix: [f32; 16]) -> DccResult<()> {
        let _ = (node, matrix);
        unsupported("set_node_world_matrix")
    }

    fn node_world_space_translation(&self, node: &NodePath) -> DccResult<[f32; 3]> {
        let _ = node;
        unsupported("node_world_space_translation")
    }

    /// World-space rotation as Euler degrees.
    fn node_world_space_rotation(&self, node: &NodePath) -> DccResult<[f32; 3]> {
        let _ = node;
        unsupported("node_world_space_rotation")
    }

    fn node_world_space_scale(&self, node: &NodePath) -> DccResult<[f32; 3]> {
        let _ = node;
        unsupported("node_world_space_scale")
    }

    fn translate_node(
        &self,
        node: &NodePath,
        translation: [f32; 3],
        space: Space,
    ) -> DccResult<()> {
        let _ = (node, translation, space);
        unsupported("translate_node")
    }

    /// Rotate by Euler degrees in the given space.
    fn rotate_node(&self, node: &NodePath, rotation: [f32; 3], space: Space) -> DccResult<()> {
        let _ = (node, rotation, space);
        unsupported("rotate_node")
    }

    fn scale_node(&self, node: &NodePath, scale: [f32; 3], space: Space) -> DccResult<()> {
        let _ = (node, scale, space);
        unsupported("scale_node")
    }

    fn freeze_transforms(
        &self,
        node: &NodePath,
        translate: bool,
        rotate: bool,
        scale: bool,
    ) -> DccResult<()> {
        let _ = (node, translate, rotate, scale);
        unsupported("freeze_transforms")
    }

    fn reset_node_transforms(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("reset_node_transforms")
    }

    fn center_pivot(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("center_pivot")
    }

    fn move_pivot_to_zero(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("move_pivot_to_zero")
    }

    /// World-space axis-aligned bounding box as (min, max) corners.
    fn node_bounding_box(&self, node: &NodePath) -> DccResult<([f32; 3], [f32; 3])> {
        let _ = node;
        unsupported("node_bounding_box")
    }

    fn match_translation(&self, source: &NodePath, target: &NodePath) -> DccResult<()> {
        let _ = (source, target);
        unsupported("match_translation")
    }

    fn match_rotation(&self, source: &NodePath, target: &NodePath) -> DccResult<()> {
        let _ = (source, target);
        unsupported("match_rotation")
    }

    fn match_scale(&self, source: &NodePath, target: &NodePath) -> DccResult<()> {
        let _ = (source, target);
        unsupported("match_scale")
    }

    fn match_transform(&self, source: &NodePath, target: &NodePath) -> DccResult<()> {
        let _ = (source, target);
        unsupported("match_transform")
    }

    fn distance_between_nodes(&self, source: &NodePath, target: &NodePath) -> DccResult<f32> {
        let _ = (source, target);
        unsupported("distance_between_nodes")
    }

    // ---- Attributes ----

    fn attribute_exists(&self, node: &NodePath, attribute_name: &str) -> DccResult<bool> {
        let _ = (node, attribute_name);
        unsupported("attribute_exists")
    }

    fn list_attributes(&self, node: &NodePath) -> DccResult<Vec<String>> {
        let _ = node;
        unsupported("list_attributes")
    }

    /// User-defined attributes only, in creation order.
    fn list_user_attributes(&self, node: &NodePath) -> DccResult<Vec<String>> {
        let _ = node;
        unsupported("list_user_attributes")
    }

    /// Add a user attribute; its kind is taken from `default_value`.
    fn add_attribute(
        &self,
        node: &NodePath,
        attribute_name: &str,
        default_value: &Value,
        keyable: bool,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, default_value, keyable);
        unsupported("add_attribute")
    }

    fn attribute_kind(&self, node: &NodePath, attribute_name: &str) -> DccResult<ValueKind> {
        let _ = (node, attribute_name);
        unsupported("attribute_kind")
    }

    fn attribute_value(&self, node: &NodePath, attribute_name: &str) -> DccResult<Value> {
        let _ = (node, attribute_name);
        unsupported("attribute_value")
    }

    fn set_attribute_value(
        &self,
        node: &NodePath,
        attribute_name: &str,
        value: &Value,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, value);
        unsupported("set_attribute_value")
    }

    fn attribute_default_value(&self, node: &NodePath, attribute_name: &str) -> DccResult<Value> {
        let _ = (node, attribute_name);
        unsupported("attribute_default_value")
    }

    /// Labels of an enum attribute, in index order.
    fn enum_attribute_values(
        &self,
        node: &NodePath,
        attribute_name: &str,
    ) -> DccResult<Vec<String>> {
        let _ = (node, attribute_name);
        unsupported("enum_attribute_values")
    }

    fn lock_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("lock_attribute")
    }

    fn unlock_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("unlock_attribute")
    }

    fn hide_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("hide_attribute")
    }

    fn show_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("show_attribute")
    }

    fn keyable_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("keyable_attribute")
    }

    fn unkeyable_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("unkeyable_attribute")
    }

    fn is_attribute_locked(&self, node: &NodePath, attribute_name: &str) -> DccResult<bool> {
        let _ = (node, attribute_name);
        unsupported("is_attribute_locked")
    }

    fn is_attribute_connected(&self, node: &NodePath, attribute_name: &str) -> DccResult<bool> {
        let _ = (node, attribute_name);
        unsupported("is_attribute_connected")
    }

    /// Lower bound of a numeric attribute, `None` when unbounded.
    fn attribute_minimum(&self, node: &NodePath, attribute_name: &str) -> DccResult<Option<Value>> {
        let _ = (node, attribute_name);
        unsupported("attribute_minimum")
    }

    fn set_attribute_minimum(
        &self,
        node: &NodePath,
        attribute_name: &str,
        value: &Value,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, value);
        unsupported("set_attribute_minimum")
    }

    fn attribute_maximum(&self, node: &NodePath, attribute_name: &str) -> DccResult<Option<Value>> {
        let _ = (node, attribute_name);
        unsupported("attribute_maximum")
    }

    fn set_attribute_maximum(
        &self,
        node: &NodePath,
        attribute_name: &str,
        value: &Value,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, value);
        unsupported("set_attribute_maximum")
    }

    fn delete_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("delete_attribute")
    }

    fn delete_user_defined_attributes(&self, node: &NodePath) -> DccResult<()> {
        let _ = node;
        unsupported("delete_user_defined_attributes")
    }

    // ---- Connections ----

    fn connect_attribute(
        &self,
        source: &NodePath,
        source_attribute: &str,
        target: &NodePath,
        target_attribute: &str,
        force: bool,
    ) -> DccResult<()> {
        let _ = (source, source_attribute, target, target_attribute, force);
        unsupported("connect_attribute")
    }

    fn disconnect_attribute(&self, node: &NodePath, attribute_name: &str) -> DccResult<()> {
        let _ = (node, attribute_name);
        unsupported("disconnect_attribute")
    }

    fn list_connections(&self, node: &NodePath, attribute_name: &str) -> DccResult<Vec<NodePath>> {
        let _ = (node, attribute_name);
        unsupported("list_connections")
    }

    fn list_source_connections(&self, node: &NodePath) -> DccResult<Vec<NodePath>> {
        let _ = node;
        unsupported("list_source_connections")
    }

    fn list_destination_connections(&self, node: &NodePath) -> DccResult<Vec<NodePath>> {
        let _ = node;
        unsupported("list_destination_connections")
    }

    // ---- Materials ----

    /// Names of the host's built-in materials.
    fn default_materials(&self) -> DccResult<Vec<String>> {
        unsupported("default_materials")
    }

    fn create_material(&self, name: &str, color: [f32; 4]) -> DccResult<NodePath> {
        let _ = (name, color);
        unsupported("create_material")
    }

    fn assign_material(&self, material: &NodePath, node: &NodePath) -> DccResult<()> {
        let _ = (material, node);
        unsupported("assign_material")
    }

    fn list_materials(&self, skip_default_materials: bool) -> DccResult<Vec<NodePath>> {
        let _ = skip_default_materials;
        unsupported("list_materials")
    }

    // ---- Cameras ----

    fn is_camera(&self, node: &NodePath) -> DccResult<bool> {
        let _ = node;
        unsupported("is_camera")
    }

    fn all_cameras(&self, full_path: bool) -> DccResult<Vec<NodePath>> {
        let _ = full_path;
        unsupported("all_cameras")
    }

    /// Camera the active viewport looks through, `None` in batch mode.
    fn current_camera(&self, full_path: bool) -> DccResult<Option<NodePath>> {
        let _ = full_path;
        unsupported("current_camera")
    }

    fn look_through_camera(&self, camera: &NodePath) -> DccResult<()> {
        let _ = camera;
        unsupported("look_through_camera")
    }

    /// Focal length in millimeters.
    fn camera_focal_length(&self, camera: &NodePath) -> DccResult<f32> {
        let _ = camera;
        unsupported("camera_focal_length")
    }

    // ---- Animation ----

    fn start_frame(&self) -> DccResult<f32> {
        unsupported("start_frame")
    }

    fn end_frame(&self) -> DccResult<f32> {
        unsupported("end_frame")
    }

    fn current_frame(&self) -> DccResult<f32> {
        unsupported("current_frame")
    }

    fn set_current_frame(&self, frame: f32) -> DccResult<()> {
        let _ = frame;
        unsupported("set_current_frame")
    }

    /// Visible (start, end) range of the time slider.
    fn time_slider_range(&self) -> DccResult<(f32, f32)> {
        unsupported("time_slider_range")
    }

    fn set_active_frame_range(&self, start_frame: f32, end_frame: f32) -> DccResult<()> {
        let _ = (start_frame, end_frame);
        unsupported("set_active_frame_range")
    }

    /// Key the attribute (all keyable attributes when `attribute_name` is
    /// `None`) at `frame`, defaulting to the current frame.
    fn set_keyframe(
        &self,
        node: &NodePath,
        attribute_name: Option<&str>,
        frame: Option<f32>,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, frame);
        unsupported("set_keyframe")
    }

    fn copy_key(&self, node: &NodePath, attribute_name: &str, frame: Option<f32>) -> DccResult<()> {
        let _ = (node, attribute_name, frame);
        unsupported("copy_key")
    }

    fn cut_key(&self, node: &NodePath, attribute_name: &str, frame: Option<f32>) -> DccResult<()> {
        let _ = (node, attribute_name, frame);
        unsupported("cut_key")
    }

    fn paste_key(
        &self,
        node: &NodePath,
        attribute_name: &str,
        option: &str,
        frame: f32,
        connect: bool,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, option, frame, connect);
        unsupported("paste_key")
    }

    fn offset_keyframes(
        &self,
        node: &NodePath,
        attribute_name: &str,
        start_frame: f32,
        end_frame: f32,
        duration: f32,
    ) -> DccResult<()> {
        let _ = (node, attribute_name, start_frame, end_frame, duration);
        unsupported("offset_keyframes")
    }

    fn find_next_keyframe(
        &self,
        node: &NodePath,
        attribute_name: &str,
        start_frame: f32,
        end_frame: f32,
    ) -> DccResult<Option<f32>> {
        let _ = (node, attribute_name, start_frame, end_frame);
        unsupported("find_next_keyframe")
    }

    fn node_animation_curves(&self, node: &NodePath) -> DccResult<Vec<NodePath>> {
        let _ = node;
        unsupported("node_animation_curves")
    }

    fn all_animation_curves(&self) -> DccResult<Vec<NodePath>> {
        unsupported("all_animation_curves")
    }

    /// Delete keys inside the frame range on the given curves (all curves
    /// when `curves` is `None`).
    fn delete_keys_in_range(
        &self,
        start_frame: f32,
        end_frame: f32,
        curves: Option<&[NodePath]>,
    ) -> DccResult<()> {
        let _ = (start_frame, end_frame, curves);
        unsupported("delete_keys_in_range")
    }

    fn key_animation_curves_at_frames(
        &self,
        frames: &[f32],
        curves: Option<&[NodePath]>,
    ) -> DccResult<()> {
        let _ = (frames, curves);
        unsupported("key_animation_curves_at_frames")
    }

    // ---- Progress ----

    /// Progress bar suited to the host UI; hosts without one return a
    /// counting no-op bar.
    fn progress_bar(&self) -> DccResult<Box<dyn ProgressBar>> {
        unsupported("progress_bar")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl DccProvider for Bare {
        fn name(&self) -> String {
            "bare".into()
        }
    }

    #[test]
    fn defaults_surface_unsupported() {
        let provider = Bare;
        let err = provider.create_node("transform", None).unwrap_err();
        assert!(err.is_unsupported());
        let err = provider.start_frame().unwrap_err();
        assert!(err.to_string().contains("start_frame"));
    }

    #[test]
    fn host_derives_from_name() {
        assert_eq!(Bare.host(), HostApp::Unknown);
    }
}
