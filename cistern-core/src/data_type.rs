use crate::{Error, Result, consume_while};
use std::str::FromStr;

/// Column types understood by the data layer.
///
/// The enum is the single source of truth for a column's type between model
/// definition and DDL generation. No SQL text is attached here, rendering
/// into database syntax happens in [`SqlWriter`](crate::SqlWriter) only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    /// Precision and scale.
    Decimal(u8, u8),
    String,
    FixedString(u32),
    Date,
    DateTime,
    /// Subsecond precision.
    DateTime64(u8),
    Uuid,
    Array(Box<DataType>),
    Nullable(Box<DataType>),
    LowCardinality(Box<DataType>),
}

impl DataType {
    pub fn array(inner: DataType) -> Self {
        DataType::Array(Box::new(inner))
    }

    pub fn nullable(inner: DataType) -> Self {
        DataType::Nullable(Box::new(inner))
    }

    pub fn low_cardinality(inner: DataType) -> Self {
        DataType::LowCardinality(Box::new(inner))
    }

    /// Parses a textual type declaration like `Decimal(18, 4)` or
    /// `Array(Nullable(String))`. Unresolvable names fail loudly instead of
    /// being passed through to the database.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rest = input;
        let result = extract(&mut rest);
        skip_whitespace(&mut rest);
        match result {
            Some(parsed) if rest.is_empty() => Ok(parsed),
            _ => Err(Error::MissingDataType {
                column: String::new(),
                type_name: input.trim().to_owned(),
            }),
        }
    }
}

impl FromStr for DataType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn extract(input: &mut &str) -> Option<DataType> {
    skip_whitespace(input);
    let name = consume_while(input, |c| c.is_ascii_alphanumeric());
    Some(match name {
        "Boolean" | "Bool" => DataType::Boolean,
        "Int8" => DataType::Int8,
        "Int16" => DataType::Int16,
        "Int32" => DataType::Int32,
        "Int64" => DataType::Int64,
        "UInt8" => DataType::UInt8,
        "UInt16" => DataType::UInt16,
        "UInt32" => DataType::UInt32,
        "UInt64" => DataType::UInt64,
        "Float32" => DataType::Float32,
        "Float64" => DataType::Float64,
        "String" => DataType::String,
        "Date" => DataType::Date,
        "DateTime" => DataType::DateTime,
        "Uuid" | "UUID" => DataType::Uuid,
        "Decimal" => {
            expect(input, '(')?;
            let precision = integer(input)?;
            expect(input, ',')?;
            let scale = integer(input)?;
            expect(input, ')')?;
            DataType::Decimal(precision, scale)
        }
        "FixedString" => {
            expect(input, '(')?;
            let length = integer(input)?;
            expect(input, ')')?;
            DataType::FixedString(length)
        }
        "DateTime64" => {
            expect(input, '(')?;
            let precision = integer(input)?;
            expect(input, ')')?;
            DataType::DateTime64(precision)
        }
        "Array" => DataType::Array(nested(input)?),
        "Nullable" => DataType::Nullable(nested(input)?),
        "LowCardinality" => DataType::LowCardinality(nested(input)?),
        _ => return None,
    })
}

fn nested(input: &mut &str) -> Option<Box<DataType>> {
    expect(input, '(')?;
    let inner = extract(input)?;
    expect(input, ')')?;
    Some(Box::new(inner))
}

fn expect(input: &mut &str, token: char) -> Option<()> {
    skip_whitespace(input);
    *input = input.strip_prefix(token)?;
    Some(())
}

fn integer<T: FromStr>(input: &mut &str) -> Option<T> {
    skip_whitespace(input);
    consume_while(input, |c| c.is_ascii_digit()).parse().ok()
}

fn skip_whitespace(input: &mut &str) {
    consume_while(input, char::is_whitespace);
}
