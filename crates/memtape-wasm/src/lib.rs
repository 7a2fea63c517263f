//! WASM bindings for the `memtape` layout decoder and tape renderer.
//!
//! This crate exposes a compact API to JavaScript for decoding binary
//! layout streams and rendering tape diagrams. Internally it uses the
//! `memtape` crate to parse tagged region/field records and to lay out a
//! tape as a tree of presentational nodes (classes, inline styles, data
//! attributes, click-handler keys) that the page turns into real elements.
//!
//! At a high level you:
//! - **Parse a stream** with [`parse_regions`] to get plain region objects
//!   (kind, addr, size, fields), or
//! - **Describe a tape** in JSON using the shapes in `memtape::serde`
//!   (regions, fields with text or sub-field content, bars, zoom, children),
//!   **construct** it once, and **render** it many times.
//!
//! The entry point from JS is the [`WasmTape`] type:
//!
//! ```text
//! // Pseudo TypeScript example
//! //
//! // const tapeJson = JSON.stringify({
//! //   regions: [
//! //     {
//! //       addr: 4096, size: 16, description: "struct",
//! //       fields: [{ addr: 4100, size: 4, name: "x", content: "u32" }],
//! //       bars: [{ addr: 4100, size: 4, color: "#88f" }]
//! //     }
//! //   ],
//! //   zoom: 8
//! // });
//! //
//! // const tape = new WasmTape(tapeJson);
//! // const tree = tape.render();
//! // // tree is a JS object: { type: "element", tag: "div", classes: [...], ... }
//! ```
//!
//! Error values are converted to `JsValue` strings via each error's display
//! message, which keeps failures inspectable from JavaScript.

mod convert;

use memtape::parser::Parser;
use memtape::render::render;
use memtape::serde::TapeNodeDef;
use memtape::tape::TapeNode;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Constructed tape definition that can be rendered from JavaScript.
///
/// A `WasmTape` owns a [`memtape::tape::TapeNode`] converted once from its
/// JSON definition; rendering is a pure transformation that can be repeated
/// without re-parsing the definition.
#[wasm_bindgen]
pub struct WasmTape {
    tape: TapeNode,
}

#[wasm_bindgen]
impl WasmTape {
    /// Creates a tape from a JSON definition.
    ///
    /// The `tape_json` string must deserialize into
    /// [`memtape::serde::TapeNodeDef`]: either a bare string (a plain text
    /// leaf tape) or an object with `regions`, optional `zoom` and optional
    /// `children`.
    #[wasm_bindgen(constructor)]
    pub fn new(tape_json: &str) -> Result<WasmTape, JsValue> {
        let def: TapeNodeDef = serde_json::from_str(tape_json).map_err(convert::error_to_js)?;
        Ok(WasmTape { tape: def.into() })
    }

    /// Renders the tape into a presentational node tree.
    ///
    /// The return value is a JavaScript object tree (see
    /// [`convert::node_to_js`]) that the page walks to create elements,
    /// apply classes/styles/attributes and wire click listeners from each
    /// node's `onClick` key.
    pub fn render(&self) -> Result<JsValue, JsValue> {
        let tree = render(&self.tape).map_err(convert::error_to_js)?;
        convert::node_to_js(&tree)
    }

    /// Renders the tape to an HTML string (no listeners; handler keys appear
    /// as `data-on-click` attributes).
    pub fn render_html(&self) -> Result<String, JsValue> {
        let tree = render(&self.tape).map_err(convert::error_to_js)?;
        Ok(tree.to_string())
    }
}

/// Parses a binary layout stream into plain region objects.
///
/// `data` is the raw byte stream (for example a `Uint8Array` passed from
/// JS). On success the result is an array of `{ kind, addr, size, fields }`
/// objects in document order; on error a `JsValue` string describing the
/// offending byte or position.
#[wasm_bindgen]
pub fn parse_regions(data: &[u8]) -> Result<JsValue, JsValue> {
    let regions = Parser::new(data).parse().map_err(convert::error_to_js)?;
    convert::regions_to_js(&regions)
}
