#[cfg(test)]
mod tests {
    use cistern::{
        ColumnDef, DataType, Error, GenericSqlWriter, Labels, Row, SqlWriter, TableSchema, Value,
    };
    use indoc::indoc;
    use rust_decimal::Decimal;
    use time::macros::{date, datetime};
    use uuid::Uuid;

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn value_sql(value: &Value) -> String {
        let mut out = String::new();
        WRITER.write_value(&mut out, value);
        out
    }

    fn type_sql(data_type: &DataType) -> String {
        let mut out = String::new();
        WRITER.write_column_type(&mut out, data_type);
        out
    }

    #[test]
    fn scalar_values_render_quoted() {
        assert_eq!(value_sql(&Value::Null), "NULL");
        assert_eq!(value_sql(&Value::Boolean(true)), "'true'");
        assert_eq!(value_sql(&Value::Boolean(false)), "'false'");
        assert_eq!(value_sql(&Value::Int32(-7)), "'-7'");
        assert_eq!(value_sql(&Value::UInt64(18)), "'18'");
        assert_eq!(value_sql(&Value::Float64(2.5)), "'2.5'");
        assert_eq!(value_sql(&Value::from(Decimal::new(1850, 2))), "'18.50'");
        assert_eq!(value_sql(&Value::from("plain")), "'plain'");
        assert_eq!(
            value_sql(&Value::from(date!(2024 - 03 - 05))),
            "'2024-03-05'"
        );
        assert_eq!(
            value_sql(&Value::from(datetime!(2024 - 03 - 05 08:30:00))),
            "'2024-03-05 08:30:00'"
        );
        assert_eq!(
            value_sql(&Value::from(datetime!(2024 - 03 - 05 08:30:00.250))),
            "'2024-03-05 08:30:00.25'"
        );
        assert_eq!(
            value_sql(&Value::from(Uuid::from_u128(
                0x67e5504410b1426f9247bb680e5fe0c8
            ))),
            "'67e55044-10b1-426f-9247-bb680e5fe0c8'"
        );
        assert_eq!(
            value_sql(&Value::from(vec!["read", "write"])),
            "['read', 'write']"
        );
    }

    #[test]
    fn text_escaping_survives_quotes_and_backslashes() {
        assert_eq!(value_sql(&Value::from("O'Brien")), "'O''Brien'");
        assert_eq!(value_sql(&Value::from("a\\b")), "'a\\\\b'");
        assert_eq!(value_sql(&Value::from("line\nbreak")), "'line\\nbreak'");
        assert_eq!(value_sql(&Value::from("")), "''");
    }

    #[test]
    fn column_types_render_in_server_syntax() {
        assert_eq!(type_sql(&DataType::Boolean), "Bool");
        assert_eq!(type_sql(&DataType::UInt64), "UInt64");
        assert_eq!(type_sql(&DataType::Decimal(18, 4)), "Decimal(18, 4)");
        assert_eq!(type_sql(&DataType::FixedString(16)), "FixedString(16)");
        assert_eq!(type_sql(&DataType::DateTime64(3)), "DateTime64(3)");
        assert_eq!(type_sql(&DataType::Uuid), "UUID");
        assert_eq!(
            type_sql(&DataType::array(DataType::nullable(DataType::String))),
            "Array(Nullable(String))"
        );
        assert_eq!(
            type_sql(&DataType::low_cardinality(DataType::String)),
            "LowCardinality(String)"
        );
    }

    #[test]
    fn create_table_lists_columns_and_storage_clauses() {
        let schema = TableSchema::new("visits")
            .column("id", DataType::UInt64)
            .column("ts", DataType::DateTime)
            .column_def(ColumnDef::new("city", DataType::String).default_value("unknown"))
            .order_by(["id", "ts"])
            .setting("index_granularity", "8192");
        let mut out = String::new();
        WRITER.write_create_table(&mut out, &schema, true);
        assert_eq!(
            out,
            indoc! {"
                CREATE TABLE IF NOT EXISTS visits (
                id UInt64,
                ts DateTime,
                city String DEFAULT 'unknown'
                ) ENGINE = MergeTree()
                ORDER BY (id, ts)
                SETTINGS index_granularity = 8192
            "}
            .trim()
        )
    }

    #[test]
    fn create_table_with_custom_engine_and_partition() {
        let schema = TableSchema::new("events")
            .column_def(ColumnDef::new("id", DataType::UInt64).comment("primary key"))
            .column("ts", DataType::DateTime)
            .engine("ReplacingMergeTree(ver)")
            .order_by("id")
            .partition_by("toYYYYMM(ts)");
        let mut out = String::new();
        WRITER.write_create_table(&mut out, &schema, false);
        assert_eq!(
            out,
            indoc! {"
                CREATE TABLE events (
                id UInt64 COMMENT 'primary key',
                ts DateTime
                ) ENGINE = ReplacingMergeTree(ver)
                ORDER BY id
                PARTITION BY toYYYYMM(ts)
            "}
            .trim()
        )
    }

    #[test]
    fn textual_declarations_build_the_same_schema() {
        let schema = TableSchema::from_fields("visits", &[("id", "UInt64"), ("tags", "Array(String)")])
            .unwrap()
            .order_by("id");
        let mut out = String::new();
        WRITER.write_create_table(&mut out, &schema, false);
        assert_eq!(
            out,
            indoc! {"
                CREATE TABLE visits (
                id UInt64,
                tags Array(String)
                ) ENGINE = MergeTree()
                ORDER BY id
            "}
            .trim()
        )
    }

    #[test]
    fn textual_declarations_report_the_offending_column() {
        let error = TableSchema::from_fields("visits", &[("id", "UInt64"), ("shape", "Polygon")])
            .unwrap_err();
        assert!(matches!(
            error,
            Error::MissingDataType { column, type_name } if column == "shape" && type_name == "Polygon"
        ));
    }

    #[test]
    fn drop_table_with_and_without_guard() {
        let mut out = String::new();
        WRITER.write_drop_table(&mut out, "visits", true);
        assert_eq!(out, "DROP TABLE IF EXISTS visits");
        out.clear();
        WRITER.write_drop_table(&mut out, "visits", false);
        assert_eq!(out, "DROP TABLE visits");
    }

    #[test]
    fn alter_statements_reuse_the_column_syntax() {
        let mut out = String::new();
        WRITER.write_add_column(
            &mut out,
            "visits",
            &ColumnDef::new("country", DataType::low_cardinality(DataType::String))
                .default_value("n/a"),
        );
        assert_eq!(
            out,
            "ALTER TABLE visits ADD COLUMN country LowCardinality(String) DEFAULT 'n/a'"
        );
        out.clear();
        WRITER.write_drop_column(&mut out, "visits", "city");
        assert_eq!(out, "ALTER TABLE visits DROP COLUMN city");
    }

    #[test]
    fn insert_renders_one_tuple_per_row() {
        let labels: Labels = vec!["id".to_string(), "city".to_string()].into();
        let rows = [
            Row::new(labels.clone(), vec![Value::from(1u64), Value::from("Lisbon")]),
            Row::new(labels, vec![Value::from(2u64), Value::from("O'Porto")]),
        ];
        let mut out = String::new();
        WRITER.write_insert(&mut out, "visits", &rows);
        assert_eq!(
            out,
            indoc! {"
                INSERT INTO visits (id, city) VALUES
                ('1', 'Lisbon'),
                ('2', 'O''Porto')
            "}
            .trim()
        )
    }

    #[test]
    fn insert_of_nothing_renders_nothing() {
        let mut out = String::new();
        WRITER.write_insert(&mut out, "visits", &[]);
        assert_eq!(out, "");
    }
}
