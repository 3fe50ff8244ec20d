//! JSON text → [`PortableJson`] parser.
//!
//! Byte-cursor decoder over the RFC 8259 grammar. String unescaping defers
//! to `serde_json` so `\uXXXX` sequences and surrogate pairs behave exactly
//! like the host serializers this model interoperates with.

use crate::error::ParseError;
use crate::value::PortableJson;

/// Parse one JSON document. Trailing non-whitespace is an error.
///
/// # Examples
///
/// ```
/// use portable_json::parse;
///
/// let v = parse(r#"{"data": {"template": "Hello"}}"#)?;
/// assert_eq!(v.get_object("data").unwrap().get_string("template").unwrap(), "Hello");
/// # Ok::<(), portable_json::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<PortableJson, ParseError> {
    let mut parser = JsonParser::new(text.as_bytes());
    let value = parser.read_any()?;
    parser.skip_whitespace();
    if parser.x < parser.data.len() {
        return Err(ParseError::TrailingData(parser.x));
    }
    Ok(value)
}

struct JsonParser<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> JsonParser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    fn read_any(&mut self) -> Result<PortableJson, ParseError> {
        self.skip_whitespace();
        let x = self.x;
        if x >= self.data.len() {
            return Err(ParseError::Invalid(x));
        }
        match self.data[x] {
            b'"' => Ok(PortableJson::Str(self.read_str()?)),
            b'[' => self.read_arr(),
            b'{' => self.read_obj(),
            b't' => self.read_literal(b"true", PortableJson::Bool(true)),
            b'f' => self.read_literal(b"false", PortableJson::Bool(false)),
            b'n' => self.read_literal(b"null", PortableJson::Null),
            c if c.is_ascii_digit() || c == b'-' => self.read_num(),
            _ => Err(ParseError::Invalid(x)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_literal(
        &mut self,
        word: &'static [u8],
        value: PortableJson,
    ) -> Result<PortableJson, ParseError> {
        let end = self.x + word.len();
        if end > self.data.len() || &self.data[self.x..end] != word {
            return Err(ParseError::Invalid(self.x));
        }
        self.x = end;
        Ok(value)
    }

    fn read_num(&mut self) -> Result<PortableJson, ParseError> {
        let start = self.x;
        let data = self.data;
        let len = data.len();
        let mut x = self.x;

        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        let mut is_float = false;
        if x < len && data[x] == b'.' {
            is_float = true;
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            is_float = true;
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;

        // Number text is ASCII by construction.
        let s = std::str::from_utf8(&data[start..x]).map_err(|_| ParseError::Invalid(start))?;
        if is_float {
            let f: f64 = s.parse().map_err(|_| ParseError::Invalid(start))?;
            Ok(PortableJson::Float(f))
        } else if let Ok(i) = s.parse::<i64>() {
            Ok(PortableJson::Int(i))
        } else {
            // Integer text past the i64 range degrades to a double.
            let f: f64 = s.parse().map_err(|_| ParseError::Invalid(start))?;
            Ok(PortableJson::Float(f))
        }
    }

    fn read_str(&mut self) -> Result<String, ParseError> {
        if self.x >= self.data.len() || self.data[self.x] != b'"' {
            return Err(ParseError::Invalid(self.x));
        }
        self.x += 1; // skip opening quote
        let x0 = self.x;
        let x1 = find_ending_quote(self.data, x0)?;
        let s = decode_json_string(&self.data[x0..x1], x0)?;
        self.x = x1 + 1; // skip closing quote
        Ok(s)
    }

    fn read_arr(&mut self) -> Result<PortableJson, ParseError> {
        self.x += 1; // skip '['
        let mut items = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            if self.x >= self.data.len() {
                return Err(ParseError::Invalid(self.x));
            }
            let ch = self.data[self.x];
            if ch == b']' {
                self.x += 1;
                return Ok(PortableJson::Array(items));
            }
            if ch == b',' {
                if first {
                    return Err(ParseError::Invalid(self.x));
                }
                self.x += 1;
            } else if !first {
                return Err(ParseError::Invalid(self.x));
            }
            items.push(self.read_any()?);
            first = false;
        }
    }

    fn read_obj(&mut self) -> Result<PortableJson, ParseError> {
        self.x += 1; // skip '{'
        let mut obj = indexmap::IndexMap::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            if self.x >= self.data.len() {
                return Err(ParseError::Invalid(self.x));
            }
            let ch = self.data[self.x];
            if ch == b'}' {
                self.x += 1;
                return Ok(PortableJson::Object(obj));
            }
            if ch == b',' {
                if first {
                    return Err(ParseError::Invalid(self.x));
                }
                self.x += 1;
            } else if !first {
                return Err(ParseError::Invalid(self.x));
            }
            self.skip_whitespace();
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.x >= self.data.len() || self.data[self.x] != b':' {
                return Err(ParseError::Invalid(self.x));
            }
            self.x += 1;
            let value = self.read_any()?;
            // Duplicate keys: last value wins, first position kept.
            obj.insert(key, value);
            first = false;
        }
    }
}

/// Position of the closing quote, accounting for backslash escapes.
fn find_ending_quote(data: &[u8], from: usize) -> Result<usize, ParseError> {
    let mut x = from;
    while x < data.len() {
        match data[x] {
            b'"' => return Ok(x),
            b'\\' => x += 2,
            _ => x += 1,
        }
    }
    Err(ParseError::Invalid(data.len()))
}

/// Decode a JSON string body (between the quotes) handling escape sequences.
fn decode_json_string(bytes: &[u8], offset: usize) -> Result<String, ParseError> {
    // Fast path: no backslash. The input slice came from a &str, so it is
    // valid UTF-8.
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| ParseError::Invalid(offset));
    }
    // Wrap in quotes and use serde_json for proper unescaping.
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).map_err(|_| ParseError::InvalidEscape(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonKind;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse("null").unwrap(), PortableJson::Null);
        assert_eq!(parse("true").unwrap(), PortableJson::Bool(true));
        assert_eq!(parse("false").unwrap(), PortableJson::Bool(false));
        assert_eq!(parse("42").unwrap(), PortableJson::Int(42));
        assert_eq!(parse("-7").unwrap(), PortableJson::Int(-7));
        assert_eq!(parse("2.5").unwrap(), PortableJson::Float(2.5));
        assert_eq!(parse("1e3").unwrap(), PortableJson::Float(1000.0));
        assert_eq!(parse("\"hi\"").unwrap(), PortableJson::Str("hi".into()));
    }

    #[test]
    fn test_parse_nested() {
        let v = parse(r#"{"a": [1, {"b": "c"}], "d": null}"#).unwrap();
        assert_eq!(v.get_array("a").unwrap().get_length().unwrap(), 2);
        assert_eq!(
            v.get_array("a")
                .unwrap()
                .object_at(1)
                .unwrap()
                .get_string("b")
                .unwrap(),
            "c"
        );
        assert_eq!(v.get("d").unwrap().kind(), JsonKind::Null);
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(
            parse(r#""line\nbreak""#).unwrap(),
            PortableJson::Str("line\nbreak".into())
        );
        assert_eq!(
            parse(r#""quote\" backslash\\""#).unwrap(),
            PortableJson::Str("quote\" backslash\\".into())
        );
        assert_eq!(
            parse(r#""\u00e9""#).unwrap(),
            PortableJson::Str("é".into())
        );
        // Surrogate pair.
        assert_eq!(
            parse(r#""\ud83d\ude00""#).unwrap(),
            PortableJson::Str("😀".into())
        );
    }

    #[test]
    fn test_parse_unicode_passthrough() {
        assert_eq!(
            parse("\"héllo 世界\"").unwrap(),
            PortableJson::Str("héllo 世界".into())
        );
    }

    #[test]
    fn test_int_overflow_degrades_to_float() {
        let v = parse("9223372036854775808").unwrap(); // i64::MAX + 1
        assert_eq!(v.kind(), JsonKind::Float);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("").is_err());
        assert!(parse("tru").is_err());
        assert!(parse("{").is_err());
        assert!(parse("[1,]").is_err());
        assert!(parse("[,1]").is_err());
        assert!(parse(r#"{"a" 1}"#).is_err());
        assert!(parse("\"unterminated").is_err());
        assert!(parse("-").is_err());
        assert!(parse("1e").is_err());
    }

    #[test]
    fn test_trailing_data_rejected() {
        assert_eq!(parse("{} x").unwrap_err(), ParseError::TrailingData(3));
        assert!(parse("{}   ").is_ok());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let v = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(v.get_int("a").unwrap(), 3);
        let keys: Vec<&str> = v.keys().unwrap().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
