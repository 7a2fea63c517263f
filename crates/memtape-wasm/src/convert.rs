//! Conversions between core types and JavaScript values.

use memtape::dom::{Element, Node};
use memtape::region::{Field, Region};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Presentational node mirrored into a serializable shape for JS.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeOut {
    Element(ElementOut),
    Text { text: String },
    Fragment { children: Vec<NodeOut> },
}

#[derive(Serialize)]
pub struct ElementOut {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline style properties as `[property, value]` pairs.
    pub styles: Vec<(String, String)>,
    /// Attributes as `[name, value]` pairs.
    pub attrs: Vec<(String, String)>,
    /// Click-handler key for the page to wire.
    #[serde(rename = "onClick", skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    pub children: Vec<NodeOut>,
}

/// Decoded region mirrored into a serializable shape for JS.
#[derive(Serialize)]
pub struct RegionOut {
    pub kind: String,
    pub addr: u64,
    pub size: u64,
    pub fields: Vec<FieldOut>,
}

#[derive(Serialize)]
pub struct FieldOut {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub addr: u64,
    pub size: u64,
}

fn node_out(node: &Node) -> NodeOut {
    match node {
        Node::Text(s) => NodeOut::Text { text: s.clone() },
        Node::Fragment(children) => NodeOut::Fragment {
            children: children.iter().map(node_out).collect(),
        },
        Node::Element(el) => NodeOut::Element(element_out(el)),
    }
}

fn element_out(el: &Element) -> ElementOut {
    ElementOut {
        tag: el.tag.clone(),
        classes: el.classes.clone(),
        styles: el.styles.clone(),
        attrs: el.attrs.clone(),
        on_click: el.on_click.clone(),
        children: el.children.iter().map(node_out).collect(),
    }
}

fn region_out(region: &Region) -> RegionOut {
    RegionOut {
        kind: region.kind.clone(),
        addr: region.addr,
        size: region.size,
        fields: region.fields.iter().map(field_out).collect(),
    }
}

fn field_out(field: &Field) -> FieldOut {
    FieldOut {
        name: field.name.clone(),
        ty: field.ty.clone(),
        addr: field.addr,
        size: field.size,
    }
}

pub fn node_to_js(node: &Node) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&node_out(node)).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn regions_to_js(regions: &[Region]) -> Result<JsValue, JsValue> {
    let out: Vec<RegionOut> = regions.iter().map(region_out).collect();
    serde_wasm_bindgen::to_value(&out).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn error_to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}
