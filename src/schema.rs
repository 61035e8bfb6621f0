use chrono::NaiveDateTime;

/// Declared storage type for one column of the trip file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Nullable 64-bit integer.
    Int,
    /// Double-precision float.
    Float,
    /// Free text.
    Text,
    /// Naive `YYYY-MM-DD HH:MM:SS` timestamp.
    Timestamp,
}

impl ColumnType {
    /// PostgreSQL type name used in the CREATE TABLE statement.
    pub fn pg_type(self) -> &'static str {
        match self {
            ColumnType::Int => "BIGINT",
            ColumnType::Float => "DOUBLE PRECISION",
            ColumnType::Text => "TEXT",
            ColumnType::Timestamp => "TIMESTAMP",
        }
    }
}

/// The declared column table for monthly yellow_tripdata files. Order
/// matches the file header, and the destination table is created with the
/// same order.
pub static COLUMNS: &[(&str, ColumnType)] = &[
    ("VendorID", ColumnType::Int),
    ("tpep_pickup_datetime", ColumnType::Timestamp),
    ("tpep_dropoff_datetime", ColumnType::Timestamp),
    ("passenger_count", ColumnType::Int),
    ("trip_distance", ColumnType::Float),
    ("RatecodeID", ColumnType::Int),
    ("store_and_fwd_flag", ColumnType::Text),
    ("PULocationID", ColumnType::Int),
    ("DOLocationID", ColumnType::Int),
    ("payment_type", ColumnType::Int),
    ("fare_amount", ColumnType::Float),
    ("extra", ColumnType::Float),
    ("mta_tax", ColumnType::Float),
    ("tip_amount", ColumnType::Float),
    ("tolls_amount", ColumnType::Float),
    ("improvement_surcharge", ColumnType::Float),
    ("total_amount", ColumnType::Float),
    ("congestion_surcharge", ColumnType::Float),
];

/// One coerced cell. An empty CSV field becomes the `None` of its declared
/// type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(Option<i64>),
    Float(Option<f64>),
    Text(Option<String>),
    Timestamp(Option<NaiveDateTime>),
}

/// One coerced row, cells in declared column order.
pub type TripRow = Vec<Value>;

/// File name for one month of trip data, e.g. `yellow_tripdata_2021-01.csv.gz`.
pub fn trip_file_name(year: i32, month: u32) -> String {
    format!("yellow_tripdata_{}-{:02}.csv.gz", year, month)
}

/// The table name is interpolated verbatim; callers own its validity.
pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", table)
}

pub fn create_table_sql(table: &str) -> String {
    let cols: Vec<String> = COLUMNS
        .iter()
        .map(|(name, ty)| format!("\"{}\" {}", name, ty.pg_type()))
        .collect();
    format!("CREATE TABLE {} ({})", table, cols.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_file_name_pads_month() {
        assert_eq!(trip_file_name(2021, 1), "yellow_tripdata_2021-01.csv.gz");
        assert_eq!(trip_file_name(2020, 12), "yellow_tripdata_2020-12.csv.gz");
    }

    #[test]
    fn test_create_table_sql_columns_in_order() {
        let sql = create_table_sql("yellow_taxi_data");
        assert!(sql.starts_with("CREATE TABLE yellow_taxi_data ("));
        assert!(sql.contains("\"VendorID\" BIGINT"));
        assert!(sql.contains("\"tpep_pickup_datetime\" TIMESTAMP"));
        assert!(sql.contains("\"store_and_fwd_flag\" TEXT"));
        assert!(sql.contains("\"congestion_surcharge\" DOUBLE PRECISION"));

        // column order must follow the declared table
        let vendor = sql.find("VendorID").unwrap();
        let pickup = sql.find("tpep_pickup_datetime").unwrap();
        let total = sql.find("congestion_surcharge").unwrap();
        assert!(vendor < pickup && pickup < total);
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(
            drop_table_sql("yellow_taxi_data"),
            "DROP TABLE IF EXISTS yellow_taxi_data"
        );
    }
}
