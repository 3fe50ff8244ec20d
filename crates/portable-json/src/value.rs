//! [`PortableJson`] — the portable JSON document model.
//!
//! A tagged value with exactly one active shape. Objects keep insertion
//! order for iteration and serialization, but equality is structural and
//! order-insensitive. Typed accessors fail with [`AccessError`] instead of
//! coercing.

use std::fmt;

use indexmap::IndexMap;

use crate::error::AccessError;

/// The shape tag of a [`PortableJson`] value, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Int => "integer",
            JsonKind::Float => "float",
            JsonKind::Str => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A JSON document: object, array, or scalar (string, 64-bit integer,
/// double, boolean, null).
///
/// Null is a stored value, distinct from a missing key.
///
/// # Examples
///
/// ```
/// use portable_json::PortableJson;
///
/// let mut event = PortableJson::empty_object();
/// let mut data = PortableJson::empty_object();
/// data.put("template", "Hello")?.put("modality", "alert")?;
/// event.put("data", data)?;
///
/// assert_eq!(event.get_object("data")?.get_string("template")?, "Hello");
/// # Ok::<(), portable_json::AccessError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PortableJson {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<PortableJson>),
    Object(IndexMap<String, PortableJson>),
}

impl Default for PortableJson {
    fn default() -> Self {
        PortableJson::Null
    }
}

impl PortableJson {
    /// An object with zero keys.
    pub fn empty_object() -> Self {
        PortableJson::Object(IndexMap::new())
    }

    /// An array with zero elements.
    pub fn empty_array() -> Self {
        PortableJson::Array(Vec::new())
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            PortableJson::Null => JsonKind::Null,
            PortableJson::Bool(_) => JsonKind::Bool,
            PortableJson::Int(_) => JsonKind::Int,
            PortableJson::Float(_) => JsonKind::Float,
            PortableJson::Str(_) => JsonKind::Str,
            PortableJson::Array(_) => JsonKind::Array,
            PortableJson::Object(_) => JsonKind::Object,
        }
    }

    /// Whether an object holds `key`. `false` (not an error) for arrays and
    /// scalars.
    pub fn has_key(&self, key: &str) -> bool {
        match self {
            PortableJson::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Object keys in insertion order.
    pub fn keys(&self) -> Result<impl Iterator<Item = &str>, AccessError> {
        match self {
            PortableJson::Object(map) => Ok(map.keys().map(String::as_str)),
            other => Err(AccessError::mismatch(JsonKind::Object, other)),
        }
    }

    /// Number of elements in an array.
    pub fn get_length(&self) -> Result<usize, AccessError> {
        match self {
            PortableJson::Array(items) => Ok(items.len()),
            other => Err(AccessError::mismatch(JsonKind::Array, other)),
        }
    }

    /// The value stored under `key` in an object.
    pub fn get(&self, key: &str) -> Result<&PortableJson, AccessError> {
        match self {
            PortableJson::Object(map) => map
                .get(key)
                .ok_or_else(|| AccessError::MissingKey(key.to_string())),
            other => Err(AccessError::mismatch(JsonKind::Object, other)),
        }
    }

    /// The element at `index` in an array.
    pub fn at(&self, index: usize) -> Result<&PortableJson, AccessError> {
        match self {
            PortableJson::Array(items) => items.get(index).ok_or(AccessError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            other => Err(AccessError::mismatch(JsonKind::Array, other)),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<&str, AccessError> {
        self.get(key)?.str_value()
    }

    pub fn get_int(&self, key: &str) -> Result<i64, AccessError> {
        self.get(key)?.int_value()
    }

    /// Numeric value under `key`; integers widen to `f64`.
    pub fn get_number(&self, key: &str) -> Result<f64, AccessError> {
        self.get(key)?.number_value()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, AccessError> {
        self.get(key)?.bool_value()
    }

    /// Object-shaped value under `key`.
    pub fn get_object(&self, key: &str) -> Result<&PortableJson, AccessError> {
        self.get(key)?.object_value()
    }

    /// Array-shaped value under `key`.
    pub fn get_array(&self, key: &str) -> Result<&PortableJson, AccessError> {
        self.get(key)?.array_value()
    }

    pub fn string_at(&self, index: usize) -> Result<&str, AccessError> {
        self.at(index)?.str_value()
    }

    pub fn int_at(&self, index: usize) -> Result<i64, AccessError> {
        self.at(index)?.int_value()
    }

    pub fn number_at(&self, index: usize) -> Result<f64, AccessError> {
        self.at(index)?.number_value()
    }

    pub fn bool_at(&self, index: usize) -> Result<bool, AccessError> {
        self.at(index)?.bool_value()
    }

    pub fn object_at(&self, index: usize) -> Result<&PortableJson, AccessError> {
        self.at(index)?.object_value()
    }

    pub fn array_at(&self, index: usize) -> Result<&PortableJson, AccessError> {
        self.at(index)?.array_value()
    }

    /// Store `value` under `key` in an object; replaces in place, keeping
    /// the key's original position. Returns the receiver so construction
    /// chains.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_json::PortableJson;
    ///
    /// let mut obj = PortableJson::empty_object();
    /// obj.put("a", 1)?.put("b", true)?.put("c", ())?;
    /// assert_eq!(obj.keys()?.collect::<Vec<_>>(), ["a", "b", "c"]);
    /// # Ok::<(), portable_json::AccessError>(())
    /// ```
    pub fn put(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PortableJson>,
    ) -> Result<&mut Self, AccessError> {
        match self {
            PortableJson::Object(map) => {
                map.insert(key.into(), value.into());
            }
            other => return Err(AccessError::mismatch(JsonKind::Object, other)),
        }
        Ok(self)
    }

    /// Store `value` at `index` in an array. `index == length` appends,
    /// `index < length` replaces in place, `index > length` is
    /// [`AccessError::IndexOutOfRange`].
    pub fn put_at(
        &mut self,
        index: usize,
        value: impl Into<PortableJson>,
    ) -> Result<&mut Self, AccessError> {
        match self {
            PortableJson::Array(items) => {
                let len = items.len();
                if index < len {
                    items[index] = value.into();
                } else if index == len {
                    items.push(value.into());
                } else {
                    return Err(AccessError::IndexOutOfRange { index, len });
                }
            }
            other => return Err(AccessError::mismatch(JsonKind::Array, other)),
        }
        Ok(self)
    }

    fn str_value(&self) -> Result<&str, AccessError> {
        match self {
            PortableJson::Str(s) => Ok(s),
            other => Err(AccessError::mismatch(JsonKind::Str, other)),
        }
    }

    fn int_value(&self) -> Result<i64, AccessError> {
        match self {
            PortableJson::Int(i) => Ok(*i),
            other => Err(AccessError::mismatch(JsonKind::Int, other)),
        }
    }

    fn number_value(&self) -> Result<f64, AccessError> {
        match self {
            PortableJson::Int(i) => Ok(*i as f64),
            PortableJson::Float(f) => Ok(*f),
            other => Err(AccessError::mismatch(JsonKind::Float, other)),
        }
    }

    fn bool_value(&self) -> Result<bool, AccessError> {
        match self {
            PortableJson::Bool(b) => Ok(*b),
            other => Err(AccessError::mismatch(JsonKind::Bool, other)),
        }
    }

    fn object_value(&self) -> Result<&PortableJson, AccessError> {
        match self {
            PortableJson::Object(_) => Ok(self),
            other => Err(AccessError::mismatch(JsonKind::Object, other)),
        }
    }

    fn array_value(&self) -> Result<&PortableJson, AccessError> {
        match self {
            PortableJson::Array(_) => Ok(self),
            other => Err(AccessError::mismatch(JsonKind::Array, other)),
        }
    }
}

impl From<&str> for PortableJson {
    fn from(s: &str) -> Self {
        PortableJson::Str(s.to_string())
    }
}

impl From<String> for PortableJson {
    fn from(s: String) -> Self {
        PortableJson::Str(s)
    }
}

impl From<i64> for PortableJson {
    fn from(i: i64) -> Self {
        PortableJson::Int(i)
    }
}

impl From<i32> for PortableJson {
    fn from(i: i32) -> Self {
        PortableJson::Int(i64::from(i))
    }
}

impl From<f64> for PortableJson {
    fn from(f: f64) -> Self {
        PortableJson::Float(f)
    }
}

impl From<bool> for PortableJson {
    fn from(b: bool) -> Self {
        PortableJson::Bool(b)
    }
}

impl From<()> for PortableJson {
    fn from(_: ()) -> Self {
        PortableJson::Null
    }
}

impl From<serde_json::Value> for PortableJson {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => PortableJson::Null,
            serde_json::Value::Bool(b) => PortableJson::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PortableJson::Int(i)
                } else {
                    PortableJson::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => PortableJson::Str(s),
            serde_json::Value::Array(arr) => {
                PortableJson::Array(arr.into_iter().map(PortableJson::from).collect())
            }
            serde_json::Value::Object(obj) => PortableJson::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, PortableJson::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<PortableJson> for serde_json::Value {
    fn from(v: PortableJson) -> Self {
        match v {
            PortableJson::Null => serde_json::Value::Null,
            PortableJson::Bool(b) => serde_json::Value::Bool(b),
            PortableJson::Int(i) => serde_json::json!(i),
            PortableJson::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PortableJson::Str(s) => serde_json::Value::String(s),
            PortableJson::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            PortableJson::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
