//! JSON-shaped rendering of values
//!
//! `{}` prints the compact form, `{:#}` the pretty form with one tab of
//! indentation per level.

use std::fmt::{self, Display, Write};

use crate::value::Value;

impl Display for Value {
    /// ```rust
    /// use ubjson::Value;
    ///
    /// let mut v = Value::Null;
    /// v["faves"] = Value::from([Value::from("Nigeria"), Value::from(3.1416)]);
    /// v["region"] = Value::from("Africa");
    ///
    /// assert_eq!(
    ///     v.to_string(),
    ///     r#"{"faves":["Nigeria",3.1416],"region":"Africa"}"#
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_value(f, self, 0, f.alternate())
    }
}

fn print_value(f: &mut fmt::Formatter<'_>, v: &Value, level: usize, pretty: bool) -> fmt::Result {
    match v {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Char(c) => {
            f.write_char('"')?;
            escape_char(f, *c)?;
            f.write_char('"')
        }
        Value::SignedInt(n) => write!(f, "{}", n),
        Value::UnsignedInt(n) => write!(f, "{}", n),
        Value::Float(n) => write!(f, "{}", n),
        Value::String(s) => print_quoted(f, s),
        Value::Binary(bytes) => write!(f, "BINARY DATA ({} bytes)", bytes.len()),
        Value::Array(items) => print_array(f, items, level, pretty),
        Value::Object(_) => print_object(f, v, level, pretty),
    }
}

fn print_array(
    f: &mut fmt::Formatter<'_>,
    items: &[Value],
    level: usize,
    pretty: bool,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, item) in items.iter().enumerate() {
        print_value(f, item, level, pretty)?;
        if i + 1 < items.len() {
            f.write_str(if pretty { ", " } else { "," })?;
        }
    }
    f.write_char(']')
}

fn print_object(
    f: &mut fmt::Formatter<'_>,
    v: &Value,
    level: usize,
    pretty: bool,
) -> fmt::Result {
    f.write_char('{')?;
    if pretty {
        f.write_char('\n')?;
    }

    let last = v.size();
    for (i, key) in v.keys().enumerate() {
        indent(f, level + 1, pretty)?;
        print_quoted(f, key)?;
        f.write_str(if pretty { " : " } else { ":" })?;
        print_value(f, &v[key], level + 1, pretty)?;
        if i + 1 < last {
            f.write_char(',')?;
        }
        if pretty {
            f.write_char('\n')?;
        }
    }

    indent(f, level, pretty)?;
    f.write_char('}')
}

fn indent(f: &mut fmt::Formatter<'_>, level: usize, pretty: bool) -> fmt::Result {
    if pretty {
        for _ in 0..level {
            f.write_char('\t')?;
        }
    }
    Ok(())
}

fn print_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        escape_char(f, c)?;
    }
    f.write_char('"')
}

fn escape_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '"' => f.write_str("\\\""),
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32),
        c => f.write_char(c),
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    fn sample() -> Value {
        let mut v = Value::Null;
        v["faves"] = Value::from([
            Value::from("Nigeria"),
            Value::from(3.1416),
            Value::from('@'),
        ]);
        v["region"] = Value::from("Africa");
        v
    }

    #[test]
    fn compact_form() {
        assert_eq!(
            sample().to_string(),
            r#"{"faves":["Nigeria",3.1416,"@"],"region":"Africa"}"#
        );
    }

    #[test]
    fn pretty_form_indents_with_tabs() {
        let expected = "{\n\t\"faves\" : [\"Nigeria\", 3.1416, \"@\"],\n\t\"region\" : \"Africa\"\n}";
        assert_eq!(format!("{:#}", sample()), expected);
    }

    #[test]
    fn scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(-700).to_string(), "-700");
        assert_eq!(Value::from(800u64).to_string(), "800");
        assert_eq!(Value::from('c').to_string(), "\"c\"");
    }

    #[test]
    fn binary_is_summarized() {
        let v = Value::binary([1u8, 2, 3, 4]);
        assert_eq!(v.to_string(), "BINARY DATA (4 bytes)");
    }

    #[test]
    fn strings_are_escaped() {
        let v = Value::from("say \"hi\"\\now");
        assert_eq!(v.to_string(), r#""say \"hi\"\\now""#);

        let v = Value::from("line\nbreak");
        assert_eq!(v.to_string(), "\"line\\nbreak\"");
    }

    #[test]
    fn nested_objects_indent_one_level_deeper() {
        let mut inner = Value::Null;
        inner["x"] = Value::from(1);
        let mut v = Value::Null;
        v["in"] = inner;

        let expected = "{\n\t\"in\" : {\n\t\t\"x\" : 1\n\t}\n}";
        assert_eq!(format!("{:#}", v), expected);
    }
}
