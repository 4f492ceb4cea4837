use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

/// A dynamically typed value traveling between models and the database.
///
/// Values are rendered into query text by a [`SqlWriter`](crate::SqlWriter)
/// and come back out of result rows produced by the client. The inventory
/// mirrors the column types of [`DataType`](crate::DataType).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Text(String),
    Date(Date),
    DateTime(PrimitiveDateTime),
    Uuid(Uuid),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            Value::UInt8(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(*v as i64),
            Value::Int16(v) => Some(*v as i64),
            Value::Int32(v) => Some(*v as i64),
            Value::Int64(v) => Some(*v),
            Value::UInt8(v) => Some(*v as i64),
            Value::UInt16(v) => Some(*v as i64),
            Value::UInt32(v) => Some(*v as i64),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            Value::Text(v) => v.parse().ok(),
            _ => None,
        }
    }

    /// Wide integers often reach the wire as strings, `Text` is parsed here
    /// so counters read back from the database stay usable.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt8(v) => Some(*v as u64),
            Value::UInt16(v) => Some(*v as u64),
            Value::UInt32(v) => Some(*v as u64),
            Value::UInt64(v) => Some(*v),
            Value::Int8(v) => u64::try_from(*v).ok(),
            Value::Int16(v) => u64::try_from(*v).ok(),
            Value::Int32(v) => u64::try_from(*v).ok(),
            Value::Int64(v) => u64::try_from(*v).ok(),
            Value::Text(v) => v.parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($source:ty => $variant:path) => {
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                $variant(value)
            }
        }
    };
}

impl_from!(bool => Value::Boolean);
impl_from!(i8 => Value::Int8);
impl_from!(i16 => Value::Int16);
impl_from!(i32 => Value::Int32);
impl_from!(i64 => Value::Int64);
impl_from!(u8 => Value::UInt8);
impl_from!(u16 => Value::UInt16);
impl_from!(u32 => Value::UInt32);
impl_from!(u64 => Value::UInt64);
impl_from!(f32 => Value::Float32);
impl_from!(f64 => Value::Float64);
impl_from!(Decimal => Value::Decimal);
impl_from!(String => Value::Text);
impl_from!(Date => Value::Date);
impl_from!(PrimitiveDateTime => Value::DateTime);
impl_from!(Uuid => Value::Uuid);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}
