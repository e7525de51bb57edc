//! Value type for untyped UBJSON data trees.

use indexmap::IndexMap;
use serde_bytes::ByteBuf;
use std::fmt::Display;

use crate::error::Error;

pub(crate) mod de;
mod iter;
pub(crate) mod ser;

pub use iter::{Iter, IterMut, Keys};

/// The discriminant tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The empty value
    Null,
    /// A true or false value
    Bool,
    /// A single 8-bit code unit
    Char,
    /// A 64-bit two's-complement integer
    SignedInt,
    /// A 64-bit unsigned integer
    UnsignedInt,
    /// An IEEE-754 binary64 number
    Float,
    /// A UTF-8 string
    String,
    /// An arbitrary byte sequence
    Binary,
    /// An ordered sequence of values
    Array,
    /// A mapping from string keys to values
    Object,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::SignedInt => "signed integer",
            Kind::UnsignedInt => "unsigned integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Binary => "binary",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// The map type backing [`Value::Object`].
///
/// Insertion-ordered, so iteration order is stable between mutations and
/// emitted byte streams are deterministic for a given construction order.
pub type Map = IndexMap<String, Value>;

/// A generalized container for every value the wire format can carry.
///
/// A `Value` holds exactly one of the ten kinds at a time. Children of
/// [`Array`](Value::Array) and [`Object`](Value::Object) are exclusively
/// owned by their parent; dropping the parent drops all descendants.
///
/// ```rust
/// use ubjson::Value;
///
/// let mut v = Value::Null;
/// v["name"] = Value::from("Ibrahim");
/// v["faves"] = Value::from([Value::from(453), Value::from(-34)]);
///
/// assert!(v.is_object());
/// assert_eq!(v["faves"][0].as_i64(), 453);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Indicates an empty value
    ///
    /// marker = `Z`, no payload
    Null,

    /// Represents a true or false value
    ///
    /// marker = `T` or `F`, no payload
    Bool(bool),

    /// A single character
    ///
    /// marker = `C`, one payload byte; code points above 127 cannot travel
    /// as `C` and are written as a one-character string instead
    Char(char),

    /// Integer in the range -(2^63) to 2^63-1 inclusive
    ///
    /// Written with the narrowest of the `i`, `I`, `l`, `L` markers whose
    /// range contains the value, big-endian payload
    SignedInt(i64),

    /// Integer in the range 0 to 2^64-1 inclusive
    ///
    /// Selected explicitly by the user or by an unsigned construction
    /// path; written as `U` when it fits one byte, otherwise through the
    /// signed markers
    UnsignedInt(u64),

    /// IEEE-754 binary64 number
    ///
    /// marker = `d` (binary32, widened on read) or `D`, big-endian payload
    Float(f64),

    /// A sequence of Unicode characters
    ///
    /// marker = `S`, count-prefixed UTF-8 payload
    String(String),

    /// A sequence of octets
    ///
    /// marker = `b`, count-prefixed raw payload; an extension beyond
    /// Draft-10
    Binary(ByteBuf),

    /// An ordered sequence of polymorphic values
    ///
    /// `[` children `]`, insertion order preserved
    Array(Vec<Value>),

    /// A mapping from distinct string keys to polymorphic values
    ///
    /// `{` key-value pairs `}`; keys are written count-prefixed with no
    /// leading `S`
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// The kind tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Char(_) => Kind::Char,
            Value::SignedInt(_) => Kind::SignedInt,
            Value::UnsignedInt(_) => Kind::UnsignedInt,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Binary(_) => Kind::Binary,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// The number of items contained in this value
    ///
    /// 0 for Null, the element count for Array and Object, 1 for
    /// everything else.
    pub fn size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 1,
        }
    }

    /// Whether this value is Null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is a Bool
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Whether this value is a Char
    pub fn is_char(&self) -> bool {
        matches!(self, Value::Char(_))
    }

    /// Whether this value is a signed integer
    pub fn is_signed_int(&self) -> bool {
        matches!(self, Value::SignedInt(_))
    }

    /// Whether this value is an unsigned integer
    pub fn is_unsigned_int(&self) -> bool {
        matches!(self, Value::UnsignedInt(_))
    }

    /// Whether this value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Whether this value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Whether this value is a binary blob
    pub fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    /// Whether this value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Whether this value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Whether this value is a signed or unsigned integer
    pub fn is_integer(&self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Whether this value is an integer or a float
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Whether equality against `rhs` can ever hold: kinds match, or both
    /// sides are numeric
    pub fn is_comparable_with(&self, rhs: &Value) -> bool {
        self.kind() == rhs.kind() || (self.is_numeric() && rhs.is_numeric())
    }

    /// Take the value out, leaving Null behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Build a one-entry object from a key and a child value
    ///
    /// ```rust
    /// use ubjson::Value;
    ///
    /// let mut v = Value::Null;
    /// v["key"] = Value::from("C++14!");
    /// assert_eq!(v, Value::entry("key", "C++14!"));
    /// ```
    pub fn entry(key: impl Into<String>, value: impl Into<Value>) -> Value {
        let mut map = Map::new();
        map.insert(key.into(), value.into());
        Value::Object(map)
    }

    /// Build a binary value from raw bytes
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Binary(ByteBuf::from(bytes.into()))
    }
}

// Total coercions. These never fail; kinds that have no meaningful
// projection fall back to 0, the empty string, or size().
impl Value {
    /// Coerce to bool
    ///
    /// Numerics are true when nonzero, a Char when it is not `'\0'`,
    /// strings, binaries and containers when non-empty, Null never.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::SignedInt(v) => *v != 0,
            Value::UnsignedInt(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Char(c) => *c != '\0',
            _ => self.size() != 0,
        }
    }

    /// Coerce to a 64-bit signed integer
    ///
    /// Unsigned values above `i64::MAX` and floats outside the
    /// representable range give 0; strings are parsed, 0 on failure;
    /// anything else gives `size()`.
    pub fn as_i64(&self) -> i64 {
        match self {
            Value::SignedInt(v) => *v,
            Value::UnsignedInt(v) => {
                if *v <= i64::MAX as u64 {
                    *v as i64
                } else {
                    0
                }
            }
            Value::Float(v) => {
                if *v >= i64::MIN as f64 && *v <= i64::MAX as f64 {
                    *v as i64
                } else {
                    0
                }
            }
            Value::Bool(b) => *b as i64,
            Value::Char(c) => *c as i64,
            Value::String(s) => s.parse().unwrap_or(0),
            _ => self.size() as i64,
        }
    }

    /// Coerce to a 64-bit unsigned integer; symmetric with [`as_i64`](Value::as_i64)
    pub fn as_u64(&self) -> u64 {
        match self {
            Value::UnsignedInt(v) => *v,
            Value::SignedInt(v) => {
                if *v >= 0 {
                    *v as u64
                } else {
                    0
                }
            }
            Value::Float(v) => {
                if *v >= 0.0 && *v <= u64::MAX as f64 {
                    *v as u64
                } else {
                    0
                }
            }
            Value::Bool(b) => *b as u64,
            Value::Char(c) => *c as u64,
            Value::String(s) => s.parse().unwrap_or(0),
            _ => self.size() as u64,
        }
    }

    /// Coerce to a binary64 float
    ///
    /// Floats project to themselves, strings are parsed (0 on failure),
    /// everything else is the larger of the two integer projections.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Float(v) => *v,
            Value::String(s) => s.parse().unwrap_or(0.0),
            _ => {
                let k1 = self.as_u64() as f64;
                let k2 = self.as_i64() as f64;
                if k1 > k2 {
                    k1
                } else {
                    k2
                }
            }
        }
    }

    /// Coerce to a 32-bit signed integer; values outside its range give 0
    pub fn as_i32(&self) -> i32 {
        let v = self.as_i64();
        if v >= i32::MIN as i64 && v <= i32::MAX as i64 {
            v as i32
        } else {
            0
        }
    }

    /// Coerce to a 32-bit unsigned integer; values outside its range give 0
    pub fn as_u32(&self) -> u32 {
        let v = self.as_u64();
        if v <= u32::MAX as u64 {
            v as u32
        } else {
            0
        }
    }

    /// Coerce to a string
    ///
    /// Strings clone themselves, Bool gives `"true"`/`"false"`, Char a
    /// one-character string, numerics their decimal rendering, everything
    /// else the empty string.
    pub fn as_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => c.to_string(),
            Value::SignedInt(v) => v.to_string(),
            Value::UnsignedInt(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            _ => String::new(),
        }
    }

    /// Coerce to raw bytes
    ///
    /// Binary clones its payload; scalars give the little-endian byte
    /// image of theirs (Char: its UTF-8 bytes, Bool: one byte);
    /// containers and Null give an empty buffer.
    pub fn as_binary(&self) -> Vec<u8> {
        match self {
            Value::Binary(bytes) => bytes.to_vec(),
            Value::Char(c) => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf).as_bytes().to_vec()
            }
            Value::Bool(b) => vec![*b as u8],
            Value::SignedInt(v) => v.to_le_bytes().to_vec(),
            Value::UnsignedInt(v) => v.to_le_bytes().to_vec(),
            Value::Float(v) => v.to_le_bytes().to_vec(),
            _ => Vec::new(),
        }
    }
}

// Strict coercions. These demand an exact kind match and are the access
// path for in-place editing.
impl Value {
    fn bad_cast(&self, expected: Kind) -> Error {
        Error::BadValueCast {
            expected,
            found: self.kind(),
        }
    }

    /// The contained bool, or `BadValueCast`
    pub fn try_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.bad_cast(Kind::Bool)),
        }
    }

    /// Mutable access to the contained bool, or `BadValueCast`
    pub fn try_bool_mut(&mut self) -> Result<&mut bool, Error> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(self.bad_cast(Kind::Bool)),
        }
    }

    /// The contained char, or `BadValueCast`
    pub fn try_char(&self) -> Result<char, Error> {
        match self {
            Value::Char(c) => Ok(*c),
            _ => Err(self.bad_cast(Kind::Char)),
        }
    }

    /// Mutable access to the contained char, or `BadValueCast`
    pub fn try_char_mut(&mut self) -> Result<&mut char, Error> {
        match self {
            Value::Char(c) => Ok(c),
            _ => Err(self.bad_cast(Kind::Char)),
        }
    }

    /// The contained signed integer, or `BadValueCast`; no widening from
    /// other numeric kinds
    pub fn try_i64(&self) -> Result<i64, Error> {
        match self {
            Value::SignedInt(v) => Ok(*v),
            _ => Err(self.bad_cast(Kind::SignedInt)),
        }
    }

    /// Mutable access to the contained signed integer, or `BadValueCast`
    pub fn try_i64_mut(&mut self) -> Result<&mut i64, Error> {
        match self {
            Value::SignedInt(v) => Ok(v),
            _ => Err(self.bad_cast(Kind::SignedInt)),
        }
    }

    /// The contained unsigned integer, or `BadValueCast`
    pub fn try_u64(&self) -> Result<u64, Error> {
        match self {
            Value::UnsignedInt(v) => Ok(*v),
            _ => Err(self.bad_cast(Kind::UnsignedInt)),
        }
    }

    /// Mutable access to the contained unsigned integer, or `BadValueCast`
    pub fn try_u64_mut(&mut self) -> Result<&mut u64, Error> {
        match self {
            Value::UnsignedInt(v) => Ok(v),
            _ => Err(self.bad_cast(Kind::UnsignedInt)),
        }
    }

    /// The contained float, or `BadValueCast`
    pub fn try_f64(&self) -> Result<f64, Error> {
        match self {
            Value::Float(v) => Ok(*v),
            _ => Err(self.bad_cast(Kind::Float)),
        }
    }

    /// Mutable access to the contained float, or `BadValueCast`
    pub fn try_f64_mut(&mut self) -> Result<&mut f64, Error> {
        match self {
            Value::Float(v) => Ok(v),
            _ => Err(self.bad_cast(Kind::Float)),
        }
    }

    /// The contained string slice, or `BadValueCast`; no rendering of
    /// other kinds
    pub fn try_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.bad_cast(Kind::String)),
        }
    }

    /// Mutable access to the contained string, or `BadValueCast`
    pub fn try_string_mut(&mut self) -> Result<&mut String, Error> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.bad_cast(Kind::String)),
        }
    }

    /// The contained binary payload, or `BadValueCast`
    pub fn try_binary(&self) -> Result<&[u8], Error> {
        match self {
            Value::Binary(bytes) => Ok(bytes.as_slice()),
            _ => Err(self.bad_cast(Kind::Binary)),
        }
    }

    /// Mutable access to the contained binary payload, or `BadValueCast`
    pub fn try_binary_mut(&mut self) -> Result<&mut ByteBuf, Error> {
        match self {
            Value::Binary(bytes) => Ok(bytes),
            _ => Err(self.bad_cast(Kind::Binary)),
        }
    }

    /// The contained array elements, or `BadValueCast`
    pub fn try_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(self.bad_cast(Kind::Array)),
        }
    }

    /// Mutable access to the contained array, or `BadValueCast`
    pub fn try_array_mut(&mut self) -> Result<&mut Vec<Value>, Error> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(self.bad_cast(Kind::Array)),
        }
    }

    /// The contained key-value map, or `BadValueCast`
    pub fn try_object(&self) -> Result<&Map, Error> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(self.bad_cast(Kind::Object)),
        }
    }

    /// Mutable access to the contained key-value map, or `BadValueCast`
    pub fn try_object_mut(&mut self) -> Result<&mut Map, Error> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(self.bad_cast(Kind::Object)),
        }
    }
}

// Container access and mutation.
impl Value {
    /// The child bound to `key`, if this is an object that has one
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable access to the child bound to `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// The child at position `index`, if this is an array that long
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Mutable access to the child at position `index`
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Bind `key` to `value`, returning the previously bound child
    ///
    /// Promotes a Null value to an empty object first, the same rule
    /// `value[key] = child` applies. Fails with [`Error::Value`] on any
    /// other kind.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, Error> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(map) => Ok(map.insert(key.into(), value.into())),
            _ => Err(Error::Value(format!(
                "cannot index {} with a key",
                self.kind()
            ))),
        }
    }

    /// Append a child
    ///
    /// A Null value becomes a one-element array. Appending to any other
    /// non-array value wraps the previous contents as the first element
    /// of a new two-element array.
    pub fn push(&mut self, value: impl Into<Value>) {
        let value = value.into();
        match self {
            Value::Null => *self = Value::Array(vec![value]),
            Value::Array(items) => items.push(value),
            _ => {
                let old = self.take();
                *self = Value::Array(vec![old, value]);
            }
        }
    }

    /// Remove the first array element structurally equal to `target`, or
    /// the object entry whose key is `target.as_string()`
    ///
    /// No-op for every other kind and for missing children.
    pub fn remove(&mut self, target: &Value) {
        match self {
            Value::Array(items) => {
                if let Some(pos) = items.iter().position(|item| item == target) {
                    items.remove(pos);
                }
            }
            Value::Object(map) => {
                map.shift_remove(target.as_string().as_str());
            }
            _ => {}
        }
    }

    /// Remove and return the object entry bound to `key`
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Find the first array element structurally equal to `target`, or the
    /// object child keyed by `target.as_string()`
    pub fn find(&self, target: &Value) -> Option<&Value> {
        match self {
            Value::Array(items) => items.iter().find(|item| *item == target),
            Value::Object(map) => map.get(target.as_string().as_str()),
            _ => None,
        }
    }

    /// The object child bound to `key`, bypassing the string coercion of
    /// [`find`](Value::find)
    pub fn find_key(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    /// Whether [`find`](Value::find) locates `target`
    pub fn contains(&self, target: &Value) -> bool {
        self.find(target).is_some()
    }

    /// Whether this is an object with an entry for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl Value {
    /// The binary64 image of a numeric payload; `None` for every other
    /// kind
    fn numeric_value(&self) -> Option<f64> {
        match self {
            Value::SignedInt(v) => Some(*v as f64),
            Value::UnsignedInt(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        // Numeric values compare across kinds on their binary64 images,
        // within machine epsilon.
        if let (Some(a), Some(b)) = (self.numeric_value(), other.numeric_value()) {
            return (a - b).abs() <= f64::EPSILON;
        }

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v == w))
            }
            _ => false,
        }
    }
}

impl std::ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => &items[index],
            _ => panic!("cannot index {} with a position", self.kind()),
        }
    }
}

impl std::ops::IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Array(items) => &mut items[index],
            _ => panic!("cannot index {} with a position", self.kind()),
        }
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map
                .get(key)
                .unwrap_or_else(|| panic!("no entry found for key {:?}", key)),
            _ => panic!("cannot index {} with a key", self.kind()),
        }
    }
}

impl std::ops::IndexMut<&str> for Value {
    /// Auto-inserts a Null child for a missing key; a Null value is
    /// promoted to an empty object first
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(map) => map.entry(key.to_owned()).or_insert(Value::Null),
            _ => panic!("cannot index {} with a key", self.kind()),
        }
    }
}

macro_rules! impl_from_for_value {
    ($variant:ident, $variant_ty:ty) => {
        impl From<$variant_ty> for Value {
            fn from(val: $variant_ty) -> Self {
                Self::$variant(val)
            }
        }
    };

    ($($variant:ident, $variant_ty:ty),*) => {
        $(impl_from_for_value!($variant, $variant_ty);)*
    }
}

impl_from_for_value! {
    Bool, bool,
    Char, char,
    SignedInt, i64,
    UnsignedInt, u64,
    Float, f64,
    String, String,
    Binary, ByteBuf
}

macro_rules! impl_from_int_for_value {
    ($variant:ident, $as_ty:ty, $($int_ty:ty),*) => {
        $(
            impl From<$int_ty> for Value {
                fn from(val: $int_ty) -> Self {
                    Self::$variant(val as $as_ty)
                }
            }
        )*
    }
}

impl_from_int_for_value!(SignedInt, i64, i8, i16, i32);
impl_from_int_for_value!(UnsignedInt, u64, u8, u16, u32);

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Self::Float(f64::from(val))
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::String(val.to_string())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Value
where
    T: Into<Value>,
{
    fn from(values: [T; N]) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Value::SignedInt(v)
                } else if let Some(v) = n.as_u64() {
                    Value::UnsignedInt(v)
                } else {
                    Value::Float(n.as_f64().expect("serde_json guaranteed this to be f64"))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(o) => Value::Object(
                o.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "json")]
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Char(c) => serde_json::Value::String(c.to_string()),
            Value::SignedInt(v) => serde_json::Value::from(v),
            Value::UnsignedInt(v) => serde_json::Value::from(v),
            Value::Float(v) => {
                serde_json::Number::from_f64(v).map_or(serde_json::Value::Null, Into::into)
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Binary(bytes) => serde_json::Value::Array(
                bytes.iter().map(|b| serde_json::Value::from(*b)).collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
