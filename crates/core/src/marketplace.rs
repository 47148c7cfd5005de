//! Declarative import configurations for every chunk-upload target table.
//!
//! Each marketplace feed has its own PostgreSQL table, its own uniqueness key
//! and its own mapping from spreadsheet headers to columns. The import
//! pipeline is generic; everything table-specific lives in one
//! [`ImportConfig`] record here.

use serde_json::Value;

use crate::import::ImportRow;

/// Input field that may carry a pre-rendered barcode payload.
pub const BARCODE_FIELD: &str = "BARCODE";

/// Maps one incoming row field onto one table column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapping {
    pub column: &'static str,
    pub field: &'static str,
    /// Value bound when the field is absent or null.
    pub default: Option<&'static str>,
}

const fn col(column: &'static str, field: &'static str) -> ColumnMapping {
    ColumnMapping {
        column,
        field,
        default: None,
    }
}

const fn col_or(column: &'static str, field: &'static str, default: &'static str) -> ColumnMapping {
    ColumnMapping {
        column,
        field,
        default: Some(default),
    }
}

/// Everything the import pipeline needs to know about one target table.
///
/// Table and column names are compiled in and never come from a request,
/// which is what allows repositories to splice them into SQL text while all
/// row values are bound as parameters.
#[derive(Debug)]
pub struct ImportConfig {
    /// Route-facing name (`mrp`, `gn`, ...), used in logs.
    pub name: &'static str,
    pub table: &'static str,
    /// Field carrying the uniqueness key in incoming rows.
    pub key_field: &'static str,
    /// Column holding the uniqueness key in the table.
    pub key_column: &'static str,
    /// Insert mapping. Includes the key column.
    pub columns: &'static [ColumnMapping],
    /// Column receiving the provided or synthesized barcode. `None` skips
    /// the barcode step entirely.
    pub barcode_column: Option<&'static str>,
}

impl ImportConfig {
    /// Columns of the bulk insert statement in bind order: mapped columns,
    /// then the barcode column, then `created_at` and `updated_at`.
    pub fn insert_columns(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = self.columns.iter().map(|c| c.column).collect();
        if let Some(barcode) = self.barcode_column {
            columns.push(barcode);
        }
        columns.push("created_at");
        columns.push("updated_at");
        columns
    }

    /// Number of bind parameters one row contributes to the insert.
    pub fn binds_per_row(&self) -> usize {
        self.insert_columns().len()
    }
}

/// Render one mapped field of `row` as the text value bound for its column.
///
/// Strings pass through, numbers and booleans use their JSON text form, and
/// missing or null fields fall back to the mapping default.
pub fn column_value(row: &ImportRow, mapping: &ColumnMapping) -> Option<String> {
    match row.get(mapping.field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Null) | None => mapping.default.map(str::to_string),
        Some(other) => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Target tables
// ---------------------------------------------------------------------------

/// Flipkart Zap MRP labels (`/api/mrp`).
pub static FLIPKART_ZAP: ImportConfig = ImportConfig {
    name: "mrp",
    table: "mrpflipkartzap",
    key_field: "FSN",
    key_column: "fsn",
    columns: &[
        col("sku", "SKU"),
        col("name_of_the_commodity", "NAME OF THE COMMODITY"),
        col("mrp", "MRP"),
        col("net_quantity", "NET QUANTITY"),
        col("month_and_year_of_manufacture", "MONTH AND YEAR OF MANUFACTURE"),
        col(
            "manufactured_packed_and_marketed_by",
            "MANUFACTURED, PACKED AND MARKETED BY",
        ),
        col("product_dimensions", "PRODUCT DIMENSIONS"),
        col(
            "contact_customer_care_executive_at",
            "CONTACT CUSTOMER CARE EXECUTIVE AT",
        ),
        col("country_of_origin", "COUNTRY OF ORIGIN"),
        col("brand", "BRAND"),
        col("fsn", "FSN"),
    ],
    barcode_column: Some("barcode"),
};

/// Flipkart GN labels (`/api/gn`).
pub static FLIPKART_GN: ImportConfig = ImportConfig {
    name: "gn",
    table: "mrpflipkartgn",
    key_field: "FSN",
    key_column: "fsn",
    columns: &[
        col("sku", "SKU"),
        col("marketed_by", "Marketed By"),
        col("manufactured_by", "Manufactured By"),
        col("date_of_manufacture", "Date of Manufacture"),
        col("brand", "Brand"),
        col("net_quantity", "Net Quantity"),
        col("country_of_origin", "Country of Origin"),
        col("mrp", "MRP"),
        col_or("consumer_complaints_contact", "For Consumer Complaints", ""),
        col("review", "Review"),
        col("fsn", "FSN"),
    ],
    barcode_column: Some("barcode"),
};

/// Appario (Amazon seller) labels (`/api/appario`).
pub static APPARIO: ImportConfig = ImportConfig {
    name: "appario",
    table: "appario",
    key_field: "ASIN",
    key_column: "asin",
    columns: &[
        col("asin", "ASIN"),
        col("name_of_the_commodity", "NAME OF THE COMMODITY"),
        col("net_quantity", "NET QUANTITY"),
        col("mrp", "MRP"),
        col(
            "manufactured_and_packed_by",
            "MANUFACTURED, PACKED AND MARKETED BY",
        ),
        col("marketed_by", "MARKETED BY"),
        col(
            "contact_customer_care_executive_at",
            "CONTACT CUSTOMER CARE EXECUTIVE AT",
        ),
        col("unit_sale_price", "UNIT SALE PRICE"),
        col("country_of_origin", "COUNTRY OF ORIGIN"),
    ],
    barcode_column: Some("barcode"),
};

/// CocoBlu (Amazon seller) labels (`/api/coco`).
pub static COCOBLU: ImportConfig = ImportConfig {
    name: "coco",
    table: "cocoblu",
    key_field: "ASIN",
    key_column: "asin",
    columns: &[
        col("asin", "ASIN"),
        col("name_of_the_commodity", "NAME OF THE COMMODITY"),
        col("net_quantity", "NET QUANTITY"),
        col("mrp", "MRP"),
        col(
            "manufactured_and_packed_by",
            "MANUFACTURED, PACKED AND MARKETED BY",
        ),
        col("marketed_by", "MARKETED BY"),
        col(
            "contact_customer_care_executive_at",
            "CONTACT CUSTOMER CARE EXECUTIVE AT",
        ),
        col("unit_sale_price", "UNIT SALE PRICE"),
        col("made_in_india", "MADE IN INDIA"),
    ],
    barcode_column: Some("barcode"),
};

/// Shared product catalog keyed by corporate code (`/api/products`).
pub static PRODUCTS: ImportConfig = ImportConfig {
    name: "products",
    table: "products",
    key_field: "corporatecode",
    key_column: "corporatecode",
    columns: &[
        col("skucode", "skucode"),
        col("corporatecode", "corporatecode"),
        col("imageurl", "imageurl"),
        col("mrp", "mrp"),
    ],
    barcode_column: None,
};

/// The marketplace label feeds, in the order cross-table lookups and
/// deletes visit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marketplace {
    FlipkartZap,
    FlipkartGn,
    Appario,
    CocoBlu,
}

impl Marketplace {
    pub const ALL: [Marketplace; 4] = [
        Marketplace::FlipkartZap,
        Marketplace::FlipkartGn,
        Marketplace::Appario,
        Marketplace::CocoBlu,
    ];

    pub fn config(self) -> &'static ImportConfig {
        match self {
            Marketplace::FlipkartZap => &FLIPKART_ZAP,
            Marketplace::FlipkartGn => &FLIPKART_GN,
            Marketplace::Appario => &APPARIO,
            Marketplace::CocoBlu => &COCOBLU,
        }
    }
}
