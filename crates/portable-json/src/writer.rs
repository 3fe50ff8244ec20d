//! [`PortableJson`] → JSON text writer.
//!
//! Appends UTF-8 JSON to a growable buffer. Object keys are emitted in
//! insertion order so output is deterministic for snapshot-style tests.

use crate::value::PortableJson;

/// Serialize a value to JSON text.
///
/// Re-parsing the output yields a value structurally equal to the input for
/// every finite tree: floats always carry a `.` or an exponent so their
/// shape survives (`5.0` stays `"5.0"`, never `"5"`). Non-finite floats are
/// not expressible in JSON and degrade: NaN to `null`, ±infinity to
/// `±1e308`.
///
/// # Examples
///
/// ```
/// use portable_json::{stringify, PortableJson};
///
/// let mut obj = PortableJson::empty_object();
/// obj.put("b", 1).unwrap().put("a", 2.0).unwrap();
/// assert_eq!(stringify(&obj), r#"{"b":1,"a":2.0}"#);
/// ```
pub fn stringify(value: &PortableJson) -> String {
    let mut writer = JsonWriter::new();
    writer.write_any(value);
    writer.out
}

struct JsonWriter {
    out: String,
}

impl JsonWriter {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn write_any(&mut self, value: &PortableJson) {
        match value {
            PortableJson::Null => self.out.push_str("null"),
            PortableJson::Bool(true) => self.out.push_str("true"),
            PortableJson::Bool(false) => self.out.push_str("false"),
            PortableJson::Int(i) => self.out.push_str(&i.to_string()),
            PortableJson::Float(f) => self.write_float(*f),
            PortableJson::Str(s) => self.write_str(s),
            PortableJson::Array(items) => self.write_arr(items),
            PortableJson::Object(map) => self.write_obj(map),
        }
    }

    fn write_float(&mut self, f: f64) {
        if f.is_nan() {
            self.out.push_str("null");
        } else if f.is_infinite() {
            self.out.push_str(if f > 0.0 { "1e308" } else { "-1e308" });
        } else {
            // `{:?}` is the shortest round-trip form and keeps a trailing
            // `.0` on integral floats.
            self.out.push_str(&format!("{f:?}"));
        }
    }

    fn write_str(&mut self, s: &str) {
        // Fast path: short clean ASCII, no quotes or backslash.
        if s.len() < 256
            && s.bytes()
                .all(|b| (b' '..=b'~').contains(&b) && b != b'"' && b != b'\\')
        {
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }
        // Fall back to serde_json for proper escaping.
        match serde_json::to_string(s) {
            Ok(quoted) => self.out.push_str(&quoted),
            Err(_) => self.out.push_str("\"\""),
        }
    }

    fn write_arr(&mut self, items: &[PortableJson]) {
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_any(item);
        }
        self.out.push(']');
    }

    fn write_obj(&mut self, map: &indexmap::IndexMap<String, PortableJson>) {
        self.out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_any(value);
        }
        self.out.push('}');
    }
}
