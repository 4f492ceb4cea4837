use cistern_core::{DataType, Error};
use std::str::FromStr;

#[test]
fn simple_names_parse() {
    assert_eq!(DataType::parse("UInt64").unwrap(), DataType::UInt64);
    assert_eq!(DataType::parse("String").unwrap(), DataType::String);
    assert_eq!(DataType::parse("Bool").unwrap(), DataType::Boolean);
    assert_eq!(DataType::parse("Boolean").unwrap(), DataType::Boolean);
    assert_eq!(DataType::parse("DateTime").unwrap(), DataType::DateTime);
    assert_eq!("Float32".parse::<DataType>().unwrap(), DataType::Float32);
    assert_eq!(DataType::parse(" UUID ").unwrap(), DataType::Uuid);
}

#[test]
fn parameterized_names_parse() {
    assert_eq!(
        DataType::parse("Decimal(18, 4)").unwrap(),
        DataType::Decimal(18, 4)
    );
    assert_eq!(
        DataType::parse("Decimal( 18 ,4 )").unwrap(),
        DataType::Decimal(18, 4)
    );
    assert_eq!(
        DataType::parse("FixedString(16)").unwrap(),
        DataType::FixedString(16)
    );
    assert_eq!(
        DataType::parse("DateTime64(3)").unwrap(),
        DataType::DateTime64(3)
    );
}

#[test]
fn wrapped_names_parse_recursively() {
    assert_eq!(
        DataType::parse("Array(Nullable(String))").unwrap(),
        DataType::array(DataType::nullable(DataType::String))
    );
    assert_eq!(
        DataType::parse("LowCardinality(String)").unwrap(),
        DataType::low_cardinality(DataType::String)
    );
    assert_eq!(
        DataType::parse("Array(Array(UInt8))").unwrap(),
        DataType::array(DataType::array(DataType::UInt8))
    );
    assert_eq!(
        DataType::parse("Nullable(Decimal(9, 2))").unwrap(),
        DataType::nullable(DataType::Decimal(9, 2))
    );
}

#[test]
fn unresolvable_declarations_fail_loudly() {
    let error = DataType::parse("Geometry").unwrap_err();
    assert!(matches!(error, Error::MissingDataType { type_name, .. } if type_name == "Geometry"));
    assert!(DataType::parse("Array(Whatever)").is_err());
    assert!(DataType::parse("UInt64 extra").is_err());
    assert!(DataType::parse("Decimal(18)").is_err());
    assert!(DataType::parse("Array(String").is_err());
    assert!(DataType::parse("").is_err());
}
