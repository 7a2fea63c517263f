//! Recursive tape renderer.
//!
//! Turns a [`TapeNode`] into a presentational [`Node`] tree: regions side by
//! side, gap-filled field rows on a shared byte-to-pixel scale, bar rows
//! equalized across regions, and child tapes indented beneath.

use crate::dom::{Element, Node, hex, text};
use crate::errors::RenderError;
use crate::layout::{DEFAULT_ZOOM, Slot, pad, width_px};
use crate::tape::{Bar, FieldContent, Tape, TapeNode, TapeRegion};

/// Renders a tape, or a plain-text leaf, into a presentational tree.
pub fn render(node: &TapeNode) -> Result<Node, RenderError> {
    match node {
        TapeNode::Text(caption) => Ok(Element::new("div").child(text(caption.as_str())).into_node()),
        TapeNode::Tape(tape) => render_tape(tape),
    }
}

fn render_tape(tape: &Tape) -> Result<Node, RenderError> {
    let zoom = tape.zoom.unwrap_or(DEFAULT_ZOOM);
    // Every region gets the same number of bar rows so region blocks line up
    // regardless of how many bars each declares.
    let max_bars = tape
        .regions
        .iter()
        .map(|r| r.bars.len())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut el_tape = Element::new("div").class("mt-tape");
    for region in &tape.regions {
        el_tape = el_tape.child(render_region(region, zoom, max_bars)?);
    }

    let mut container = Element::new("div")
        .classes(["mt-flex", "mt-flex-column", "mt-g3"])
        .child(el_tape.into_node());

    if !tape.children.is_empty() {
        let mut el_children =
            Element::new("div").classes(["mt-pl3", "mt-flex", "mt-flex-column", "mt-g3"]);
        for child in &tape.children {
            el_children = el_children.child(render(child)?);
        }
        container = container.child(el_children.into_node());
    }

    log::trace!("rendered tape: {} regions at zoom {zoom}", tape.regions.len());
    Ok(container.into_node())
}

fn render_region(region: &TapeRegion, zoom: u64, max_bars: usize) -> Result<Node, RenderError> {
    let el_addr = Element::new("div")
        .classes([
            "mt-code",
            "mt-f3",
            "mt-c2",
            "mt-flex",
            "mt-flex-column",
            "mt-justify-end",
            "mt-pl1",
            "mt-pb1",
        ])
        .child(text(hex(region.addr)));

    let mut el_fields = Element::new("div").class("mt-region-fields");
    for slot in pad(region.addr, region.size, &region.fields) {
        el_fields = el_fields.child(render_slot(&slot, zoom)?);
    }

    Ok(Element::new("div")
        .class("mt-region")
        .child(el_addr.into_node())
        .child(el_fields.into_node())
        .child(render_bars(region, zoom, max_bars))
        .child(
            Element::new("div")
                .classes(["mt-f3", "mt-tc"])
                .child(text(region.description.as_str()))
                .into_node(),
        )
        .into_node())
}

fn render_slot(slot: &Slot<'_>, zoom: u64) -> Result<Node, RenderError> {
    let addr = slot.addr();
    let size = slot.size();
    let mut el_field = Element::new("div")
        .classes(["mt-field", "mt-flex", "mt-flex-column", "mt-tc"])
        .style("width", px(width_px(size, zoom)))
        .attr("data-addr-start", addr.to_string())
        .attr("data-addr-end", addr.saturating_add(size).to_string());

    match slot {
        Slot::Padding { .. } => {
            el_field = el_field.child(content_cell(CellBody::Node(padding_marker()), None, None));
        }
        Slot::Field(field) => {
            match &field.content {
                FieldContent::Fields(subfields) => {
                    let mut el_subfields = Element::new("div").class("mt-flex");
                    for sub_slot in pad(field.addr, field.size, subfields) {
                        let body = match &sub_slot {
                            Slot::Padding { .. } => CellBody::Node(padding_marker()),
                            Slot::Field(sub) => match &sub.content {
                                FieldContent::Fields(_) => {
                                    return Err(RenderError::InvalidNesting {
                                        field: sub
                                            .name
                                            .clone()
                                            .unwrap_or_else(|| "(unnamed)".to_string()),
                                    });
                                }
                                FieldContent::Text(value) => CellBody::Text(value.clone()),
                            },
                        };
                        el_subfields = el_subfields.child(content_cell(
                            body,
                            Some("mt-subfield"),
                            field.on_click.as_deref(),
                        ));
                    }
                    el_field = el_field.child(el_subfields.into_node());
                }
                FieldContent::Text(value) => {
                    el_field = el_field.child(content_cell(
                        CellBody::Text(value.clone()),
                        None,
                        field.on_click.as_deref(),
                    ));
                }
            }
            if let Some(name) = &field.name {
                el_field = el_field.child(caption(name));
            }
        }
    }
    Ok(el_field.into_node())
}

fn render_bars(region: &TapeRegion, zoom: u64, max_bars: usize) -> Node {
    let placeholder = Bar {
        addr: region.addr,
        size: 0,
        color: None,
    };
    let mut el_bars = Element::new("div").classes(["mt-flex", "mt-flex-column"]);
    for i in 0..max_bars {
        let bar = region.bars.get(i).unwrap_or(&placeholder);
        // Bars share the fields' byte-to-pixel scale. A bar starting before
        // the region clamps to the region's left edge.
        let offset = bar.addr.saturating_sub(region.addr);
        let mut el_bar = Element::new("div")
            .class("mt-bar")
            .style("margin-left", px(width_px(offset, zoom)))
            .style("width", px(width_px(bar.size, zoom)));
        if let Some(color) = &bar.color {
            el_bar = el_bar.style("background-color", color.as_str());
        }
        el_bars = el_bars.child(el_bar.into_node());
    }
    el_bars.into_node()
}

enum CellBody {
    Text(String),
    Node(Node),
}

fn content_cell(body: CellBody, class: Option<&str>, on_click: Option<&str>) -> Node {
    let mut el = Element::new("div");
    if let Some(class) = class {
        el = el.class(class);
    }
    if on_click.is_some() {
        el = el.class("mt-clickable");
    }
    el = el.classes(["mt-flex-grow-1", "mt-flex", "mt-flex-column", "mt-code", "mt-f2"]);
    el = match body {
        CellBody::Text(value) => el.class("mt-pa1").child(text(value)),
        CellBody::Node(node) => el.child(node),
    };
    if let Some(handler) = on_click {
        el = el.on_click(handler);
    }
    el.into_node()
}

/// Striped filler drawn in slots no declared field covers.
fn padding_marker() -> Node {
    Element::new("div")
        .classes(["mt-flex-grow-1", "mt-striped"])
        .into_node()
}

/// Caption strip below a field's value. Whitespace-only names become a
/// non-breaking blank instead of collapsing the strip.
fn caption(name: &str) -> Node {
    let label = name.trim();
    let label = if label.is_empty() { "\u{a0}" } else { label };
    Element::new("div")
        .classes(["mt-bt", "mt-code", "mt-b2", "mt-c2", "mt-pa1", "mt-f3"])
        .child(text(label))
        .into_node()
}

fn px(value: u64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use crate::tape::TapeField;

    use super::*;

    fn el(node: &Node) -> &Element {
        match node {
            Node::Element(el) => el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    fn style<'a>(el: &'a Element, property: &str) -> &'a str {
        el.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("no style {property}"))
    }

    fn text_field(addr: u64, size: u64, name: &str, value: &str) -> TapeField {
        TapeField {
            addr,
            size,
            name: Some(name.to_string()),
            content: FieldContent::Text(value.to_string()),
            on_click: None,
        }
    }

    fn one_region_tape(region: TapeRegion) -> TapeNode {
        TapeNode::Tape(Tape {
            regions: vec![region],
            zoom: Some(1),
            children: Vec::new(),
        })
    }

    /// container > tape > region > fields row.
    fn fields_row(tree: &Node) -> &Element {
        let container = el(tree);
        let tape = el(&container.children[0]);
        let region = el(&tape.children[0]);
        el(&region.children[1])
    }

    #[test]
    fn test_text_tape_renders_caption_block() {
        let tree = render(&TapeNode::Text("empty".to_string())).unwrap();
        assert_eq!(tree.to_string(), "<div>empty</div>");
    }

    #[test]
    fn test_region_renders_three_slots_with_proportional_widths() {
        let region = TapeRegion {
            addr: 0x1000,
            size: 16,
            description: "struct".to_string(),
            fields: vec![text_field(0x1004, 4, "x", "u32")],
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        assert_eq!(fields.children.len(), 3);
        let widths: Vec<&str> = fields
            .children
            .iter()
            .map(|slot| style(el(slot), "width"))
            .collect();
        assert_eq!(widths, ["4px", "4px", "8px"]);
    }

    #[test]
    fn test_slots_carry_address_attributes() {
        let region = TapeRegion {
            addr: 0x1000,
            size: 16,
            description: String::new(),
            fields: vec![text_field(0x1004, 4, "x", "u32")],
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        let field = el(&fields.children[1]);
        assert!(field.attrs.contains(&(
            "data-addr-start".to_string(),
            0x1004u64.to_string()
        )));
        assert!(field.attrs.contains(&(
            "data-addr-end".to_string(),
            0x1008u64.to_string()
        )));
    }

    #[test]
    fn test_field_width_is_capped() {
        let region = TapeRegion {
            addr: 0,
            size: 4096,
            description: String::new(),
            fields: Vec::new(),
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        assert_eq!(style(el(&fields.children[0]), "width"), "240px");
    }

    #[test]
    fn test_subfields_rendered_inline_with_padding() {
        let region = TapeRegion {
            addr: 0,
            size: 8,
            description: String::new(),
            fields: vec![TapeField {
                addr: 0,
                size: 8,
                name: Some("flags".to_string()),
                content: FieldContent::Fields(vec![
                    text_field(0, 1, "lo", "1"),
                    text_field(7, 1, "hi", "2"),
                ]),
                on_click: Some("inspect".to_string()),
            }],
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        let field = el(&fields.children[0]);
        let subrow = el(&field.children[0]);
        assert_eq!(subrow.classes, vec!["mt-flex"]);
        // lo, padding, hi
        assert_eq!(subrow.children.len(), 3);
        for cell in &subrow.children {
            let cell = el(cell);
            assert!(cell.classes.contains(&"mt-subfield".to_string()));
            // Sub-cells inherit the parent field's click key.
            assert_eq!(cell.on_click.as_deref(), Some("inspect"));
        }
    }

    #[test]
    fn test_sub_sub_fields_rejected() {
        let region = TapeRegion {
            addr: 0,
            size: 4,
            description: String::new(),
            fields: vec![TapeField {
                addr: 0,
                size: 4,
                name: None,
                content: FieldContent::Fields(vec![TapeField {
                    addr: 0,
                    size: 4,
                    name: Some("inner".to_string()),
                    content: FieldContent::Fields(vec![text_field(0, 4, "deep", "?")]),
                    on_click: None,
                }]),
                on_click: None,
            }],
            bars: Vec::new(),
        };
        assert_eq!(
            render(&one_region_tape(region)).unwrap_err(),
            RenderError::InvalidNesting {
                field: "inner".to_string()
            }
        );
    }

    #[test]
    fn test_blank_name_keeps_caption_strip() {
        let region = TapeRegion {
            addr: 0,
            size: 4,
            description: String::new(),
            fields: vec![text_field(0, 4, "   ", "u32")],
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        let field = el(&fields.children[0]);
        let cap = el(&field.children[1]);
        assert_eq!(cap.children, vec![text("\u{a0}")]);
    }

    #[test]
    fn test_bar_rows_equalized_across_regions() {
        let annotated = TapeRegion {
            addr: 0x100,
            size: 8,
            description: String::new(),
            fields: Vec::new(),
            bars: vec![
                Bar {
                    addr: 0x102,
                    size: 2,
                    color: Some("#f00".to_string()),
                },
                Bar {
                    addr: 0x104,
                    size: 4,
                    color: None,
                },
            ],
        };
        let plain = TapeRegion {
            addr: 0x200,
            size: 8,
            description: String::new(),
            fields: Vec::new(),
            bars: Vec::new(),
        };
        let tree = render(&TapeNode::Tape(Tape {
            regions: vec![annotated, plain],
            zoom: Some(1),
            children: Vec::new(),
        }))
        .unwrap();

        let container = el(&tree);
        let tape = el(&container.children[0]);
        for region in &tape.children {
            let bars = el(&el(region).children[2]);
            assert_eq!(bars.children.len(), 2);
        }

        let first_bars = el(&el(&tape.children[0]).children[2]);
        let bar = el(&first_bars.children[0]);
        assert_eq!(style(bar, "margin-left"), "2px");
        assert_eq!(style(bar, "width"), "2px");
        assert_eq!(style(bar, "background-color"), "#f00");

        // Placeholder rows sit at the region base with zero size.
        let second_bars = el(&el(&tape.children[1]).children[2]);
        let placeholder = el(&second_bars.children[0]);
        assert_eq!(style(placeholder, "margin-left"), "0px");
        assert_eq!(style(placeholder, "width"), "0px");
    }

    #[test]
    fn test_bar_before_region_clamps_to_left_edge() {
        let region = TapeRegion {
            addr: 0x100,
            size: 8,
            description: String::new(),
            fields: Vec::new(),
            bars: vec![Bar {
                addr: 0x80,
                size: 4,
                color: None,
            }],
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let container = el(&tree);
        let tape = el(&container.children[0]);
        let bars = el(&el(&tape.children[0]).children[2]);
        assert_eq!(style(el(&bars.children[0]), "margin-left"), "0px");
    }

    #[test]
    fn test_children_rendered_indented() {
        let tree = render(&TapeNode::Tape(Tape {
            regions: Vec::new(),
            zoom: None,
            children: vec![
                TapeNode::Text("left".to_string()),
                TapeNode::Text("right".to_string()),
            ],
        }))
        .unwrap();

        let container = el(&tree);
        assert_eq!(container.children.len(), 2);
        let children_block = el(&container.children[1]);
        assert!(children_block.classes.contains(&"mt-pl3".to_string()));
        assert_eq!(children_block.children.len(), 2);
    }

    #[test]
    fn test_default_zoom_applies() {
        let region = TapeRegion {
            addr: 0,
            size: 4,
            description: String::new(),
            fields: vec![text_field(0, 2, "a", "v")],
            bars: Vec::new(),
        };
        let tree = render(&TapeNode::Tape(Tape {
            regions: vec![region],
            zoom: None,
            children: Vec::new(),
        }))
        .unwrap();

        let fields = fields_row(&tree);
        // 2 bytes at the 24 px/byte default.
        assert_eq!(style(el(&fields.children[0]), "width"), "48px");
    }

    #[test]
    fn test_clickable_cell_classes_and_key() {
        let mut field = text_field(0, 4, "x", "u32");
        field.on_click = Some("jump:0".to_string());
        let region = TapeRegion {
            addr: 0,
            size: 4,
            description: String::new(),
            fields: vec![field],
            bars: Vec::new(),
        };
        let tree = render(&one_region_tape(region)).unwrap();

        let fields = fields_row(&tree);
        let cell = el(&el(&fields.children[0]).children[0]);
        assert!(cell.classes.contains(&"mt-clickable".to_string()));
        assert_eq!(cell.on_click.as_deref(), Some("jump:0"));
    }
}
