//! Product catalog records.
//!
//! Products arrive from the REST backend with an inconsistent shape: numeric
//! fields may be missing, null, or string-typed, and size/colour may live
//! only on the first variant. Everything is coerced to a usable default at
//! the deserialization boundary so the filtering engine never sees a hole.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::filter::tokens::FacetKey;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Minor-unit-free amount (e.g. whole rupees). Missing or unparseable
    /// prices coerce to zero.
    #[serde(default, deserialize_with = "de_decimal")]
    pub price: Decimal,
    /// Reference/list price, display-only (discount chips).
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub mrp: Option<Decimal>,
    #[serde(default, rename = "type", alias = "category")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "de_f64")]
    pub popularity: f64,
    /// RFC 3339 string or epoch-millis number; anything else is dropped.
    #[serde(
        default,
        rename = "createdAt",
        alias = "date",
        deserialize_with = "de_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// One purchasable size/colour/price combination. The first variant doubles
/// as the fallback source for a product's top-level size and colour.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub price: Option<Decimal>,
}

impl Product {
    /// Size label: top-level value when non-blank, else variant[0]'s.
    pub fn size_label(&self) -> Option<&str> {
        non_blank(&self.size).or_else(|| self.variants.first().and_then(|v| non_blank(&v.size)))
    }

    /// Colour label, with the same first-variant fallback as size.
    pub fn color_label(&self) -> Option<&str> {
        non_blank(&self.color).or_else(|| self.variants.first().and_then(|v| non_blank(&v.color)))
    }

    /// The value this product contributes to a categorical facet, trimmed;
    /// `None` when blank (blank values never become facet options).
    pub fn facet_value(&self, key: FacetKey) -> Option<&str> {
        match key {
            FacetKey::Type => non_blank(&self.product_type),
            FacetKey::Size => self.size_label(),
            FacetKey::Color => self.color_label(),
        }
    }

    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Rounded percentage off MRP, for display only. `None` unless the MRP
    /// is strictly above the selling price.
    pub fn discount_percent(&self) -> Option<u32> {
        let mrp = self.mrp?;
        if mrp <= self.price || mrp.is_zero() {
            return None;
        }
        ((mrp - self.price) * Decimal::from(100u32) / mrp).round().to_u32()
    }

    /// Lower-cased concatenation of the product's descriptive fields,
    /// skipping whatever is absent. This is the haystack for free-text search.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.title.as_str()];
        for field in [
            self.description.as_deref(),
            non_blank(&self.product_type),
            self.color_label(),
            self.size_label(),
            non_blank(&self.material),
            non_blank(&self.brand),
        ]
        .into_iter()
        .flatten()
        {
            parts.push(field);
        }
        parts.join(" ").to_lowercase()
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Lenient field deserializers
// =============================================================================

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn de_decimal<'de, D: Deserializer<'de>>(de: D) -> Result<Decimal, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(value
        .as_ref()
        .and_then(coerce_decimal)
        .unwrap_or(Decimal::ZERO))
}

fn de_opt_decimal<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Decimal>, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.as_ref().and_then(coerce_decimal))
}

fn de_f64<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn de_timestamp<'de, D: Deserializer<'de>>(de: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(Value::Number(n)) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_price_coercion() {
        let p: Product = serde_json::from_str(r#"{"id":"a","title":"Mat","price":"499"}"#).unwrap();
        assert_eq!(p.price, Decimal::from(499));

        let p: Product = serde_json::from_str(r#"{"id":"b","title":"Mat","price":null}"#).unwrap();
        assert_eq!(p.price, Decimal::ZERO);

        let p: Product = serde_json::from_str(r#"{"id":"c","title":"Mat"}"#).unwrap();
        assert_eq!(p.price, Decimal::ZERO);

        let p: Product =
            serde_json::from_str(r#"{"id":"d","title":"Mat","price":"not-a-number"}"#).unwrap();
        assert_eq!(p.price, Decimal::ZERO);
    }

    #[test]
    fn type_accepts_category_alias() {
        let p: Product =
            serde_json::from_str(r#"{"id":"a","title":"Rug","category":"Rug"}"#).unwrap();
        assert_eq!(p.facet_value(FacetKey::Type), Some("Rug"));
    }

    #[test]
    fn variant_fallback_for_size_and_color() {
        let p: Product = serde_json::from_str(
            r#"{"id":"a","title":"Mat","variants":[{"size":"L","color":"Blue"},{"size":"XL"}]}"#,
        )
        .unwrap();
        assert_eq!(p.size_label(), Some("L"));
        assert_eq!(p.color_label(), Some("Blue"));

        let p: Product = serde_json::from_str(
            r#"{"id":"b","title":"Mat","size":" M ","variants":[{"size":"L"}]}"#,
        )
        .unwrap();
        // top-level wins when non-blank, and is trimmed
        assert_eq!(p.size_label(), Some("M"));
    }

    #[test]
    fn blank_labels_are_none() {
        let p: Product =
            serde_json::from_str(r#"{"id":"a","title":"Mat","color":"   "}"#).unwrap();
        assert_eq!(p.color_label(), None);
    }

    #[test]
    fn timestamp_formats() {
        let p: Product = serde_json::from_str(
            r#"{"id":"a","title":"Mat","createdAt":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(p.created_at.is_some());

        let p: Product =
            serde_json::from_str(r#"{"id":"b","title":"Mat","date":1709287200000}"#).unwrap();
        assert!(p.created_at.is_some());

        let p: Product =
            serde_json::from_str(r#"{"id":"c","title":"Mat","createdAt":"yesterday"}"#).unwrap();
        assert_eq!(p.created_at, None);
        assert_eq!(p.created_at_or_epoch(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn discount_requires_mrp_above_price() {
        let mut p = Product {
            price: Decimal::from(750),
            mrp: Some(Decimal::from(1000)),
            ..Product::default()
        };
        assert_eq!(p.discount_percent(), Some(25));

        p.mrp = Some(Decimal::from(700));
        assert_eq!(p.discount_percent(), None);

        p.mrp = None;
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn searchable_text_skips_absent_fields() {
        let p: Product = serde_json::from_str(
            r#"{"id":"a","title":"Premium Cotton Yoga Mat","type":"Mat","color":"Teal"}"#,
        )
        .unwrap();
        let text = p.searchable_text();
        assert_eq!(text, "premium cotton yoga mat mat teal");
    }
}
