/*
This code is part of the shapefile_codec library.
Created: 14/02/2026
Last Modified: 10/06/2026
License: MIT

Notes: Every value renders to exactly its field's declared width: numbers
right-aligned and space-padded, text left-aligned, dates packed as
yyyyMMdd. Parsing mirrors that layout and maps a blank or unparsable
region to None rather than failing, which is how real-world .dbf files
behave.
*/
use crate::dbase::field::{DbaseField, DbaseFieldType};
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// The typed, nullable payload of one record field.
#[derive(Clone, Debug, PartialEq)]
pub enum DbaseValue {
    DateTime(Option<NaiveDateTime>),
    Decimal(Option<f64>),
    Double(Option<f64>),
    Single(Option<f32>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Character(Option<String>),
    Logical(Option<bool>),
}

impl DbaseValue {
    fn kind_name(&self) -> &'static str {
        match self {
            DbaseValue::DateTime(_) => "DateTime",
            DbaseValue::Decimal(_) => "Decimal",
            DbaseValue::Double(_) => "Double",
            DbaseValue::Single(_) => "Single",
            DbaseValue::Int16(_) => "Int16",
            DbaseValue::Int32(_) => "Int32",
            DbaseValue::Character(_) => "Character",
            DbaseValue::Logical(_) => "Logical",
        }
    }

    fn matches(&self, field_type: DbaseFieldType) -> bool {
        match self {
            DbaseValue::DateTime(_) => field_type == DbaseFieldType::Date,
            DbaseValue::Decimal(_) | DbaseValue::Int16(_) | DbaseValue::Int32(_) => {
                field_type == DbaseFieldType::Number
            }
            DbaseValue::Double(_) | DbaseValue::Single(_) => {
                field_type == DbaseFieldType::Float || field_type == DbaseFieldType::Number
            }
            DbaseValue::Character(_) => field_type == DbaseFieldType::Character,
            DbaseValue::Logical(_) => field_type == DbaseFieldType::Logical,
        }
    }
}

/// One field descriptor together with its typed value.
#[derive(Clone, Debug, PartialEq)]
pub struct DbaseFieldValue {
    field: DbaseField,
    value: DbaseValue,
}

impl DbaseFieldValue {
    /// A null value of the kind the field's type tag implies.
    pub fn null(field: DbaseField) -> DbaseFieldValue {
        let value = default_value_kind(&field);
        DbaseFieldValue { field, value }
    }

    pub fn new(field: DbaseField, value: DbaseValue) -> Result<DbaseFieldValue> {
        if !value.matches(field.field_type()) {
            return Err(Error::invalid(
                "field value",
                format!(
                    "a {} value cannot populate field '{}' of type {}",
                    value.kind_name(),
                    field.name(),
                    field.field_type()
                ),
            ));
        }
        Ok(DbaseFieldValue { field, value })
    }

    pub fn field(&self) -> &DbaseField {
        &self.field
    }

    pub fn value(&self) -> &DbaseValue {
        &self.value
    }

    /// Renders the value as exactly `field.length()` ASCII bytes.
    pub fn render(&self) -> Result<Vec<u8>> {
        let width = self.field.length() as usize;
        let text = match &self.value {
            DbaseValue::Character(None)
            | DbaseValue::DateTime(None)
            | DbaseValue::Decimal(None)
            | DbaseValue::Double(None)
            | DbaseValue::Single(None)
            | DbaseValue::Int16(None)
            | DbaseValue::Int32(None) => " ".repeat(width),
            DbaseValue::Logical(None) => "?".repeat(width),
            DbaseValue::Character(Some(s)) => {
                let mut s = s.clone();
                if s.len() > width {
                    // never cut through a multi-byte character
                    let mut end = width;
                    while !s.is_char_boundary(end) {
                        end -= 1;
                    }
                    s.truncate(end);
                }
                while s.len() < width {
                    s.push(' ');
                }
                s
            }
            DbaseValue::DateTime(Some(dt)) => {
                let packed = if width >= 14 {
                    dt.format("%Y%m%d%H%M%S").to_string()
                } else {
                    dt.format("%Y%m%d").to_string()
                };
                pad_left(&packed, width, self.field.name())?
            }
            DbaseValue::Decimal(Some(v)) => pad_left(
                &format!("{:.*}", self.field.decimal_count() as usize, v),
                width,
                self.field.name(),
            )?,
            DbaseValue::Double(Some(v)) => pad_left(
                &format!("{:.*}", self.field.decimal_count() as usize, v),
                width,
                self.field.name(),
            )?,
            DbaseValue::Single(Some(v)) => pad_left(
                &format!("{:.*}", self.field.decimal_count() as usize, v),
                width,
                self.field.name(),
            )?,
            DbaseValue::Int16(Some(v)) => pad_left(&v.to_string(), width, self.field.name())?,
            DbaseValue::Int32(Some(v)) => pad_left(&v.to_string(), width, self.field.name())?,
            DbaseValue::Logical(Some(v)) => if *v { "T" } else { "F" }.to_string(),
        };
        Ok(text.into_bytes())
    }

    /// Parses exactly `field.length()` bytes back into a typed value.
    pub fn parse(field: &DbaseField, bytes: &[u8]) -> DbaseFieldValue {
        let text: String = bytes
            .iter()
            .map(|b| *b as char)
            .collect::<String>()
            .trim_matches(|c| c == ' ' || c == '\0')
            .to_string();
        let value = match default_value_kind(field) {
            DbaseValue::Character(_) => DbaseValue::Character(if text.is_empty() {
                None
            } else {
                Some(text)
            }),
            DbaseValue::DateTime(_) => DbaseValue::DateTime(parse_date_time(&text)),
            DbaseValue::Decimal(_) => DbaseValue::Decimal(text.parse::<f64>().ok()),
            DbaseValue::Double(_) => DbaseValue::Double(text.parse::<f64>().ok()),
            DbaseValue::Single(_) => DbaseValue::Single(text.parse::<f32>().ok()),
            DbaseValue::Int16(_) => DbaseValue::Int16(text.parse::<i16>().ok()),
            DbaseValue::Int32(_) => DbaseValue::Int32(text.parse::<i32>().ok()),
            DbaseValue::Logical(_) => DbaseValue::Logical(match text.as_str() {
                "T" | "t" | "Y" | "y" => Some(true),
                "F" | "f" | "N" | "n" => Some(false),
                _ => None,
            }),
        };
        DbaseFieldValue {
            field: field.clone(),
            value,
        }
    }
}

/// The value kind a field's type tag, width and decimal count imply when
/// no schema-specific kind is known.
fn default_value_kind(field: &DbaseField) -> DbaseValue {
    match field.field_type() {
        DbaseFieldType::Character => DbaseValue::Character(None),
        DbaseFieldType::Date => DbaseValue::DateTime(None),
        DbaseFieldType::Logical => DbaseValue::Logical(None),
        DbaseFieldType::Float => DbaseValue::Single(None),
        DbaseFieldType::Number => {
            if field.decimal_count() > 0 {
                DbaseValue::Decimal(None)
            } else if field.length() < 5 {
                DbaseValue::Int16(None)
            } else {
                DbaseValue::Int32(None)
            }
        }
    }
}

fn pad_left(text: &str, width: usize, name: impl std::fmt::Display) -> Result<String> {
    if text.len() > width {
        return Err(Error::invalid(
            "field value",
            format!(
                "'{}' does not fit the declared width {} of field '{}'",
                text, width, name
            ),
        ));
    }
    Ok(format!("{:>width$}", text, width = width))
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    if text.len() >= 14 {
        NaiveDateTime::parse_from_str(&text[..14], "%Y%m%d%H%M%S").ok()
    } else if text.len() == 8 {
        NaiveDate::parse_from_str(text, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::{DbaseFieldValue, DbaseValue};
    use crate::dbase::field::DbaseField;
    use chrono::NaiveDate;

    fn roundtrip(fv: &DbaseFieldValue) -> DbaseFieldValue {
        let bytes = fv.render().unwrap();
        assert_eq!(bytes.len(), fv.field().length() as usize);
        DbaseFieldValue::parse(fv.field(), &bytes)
    }

    #[test]
    fn test_character_render_and_parse() {
        let field = DbaseField::character("NAME", 10).unwrap();
        let fv =
            DbaseFieldValue::new(field.clone(), DbaseValue::Character(Some("Gent".to_string())))
                .unwrap();
        assert_eq!(fv.render().unwrap(), b"Gent      ".to_vec());
        assert_eq!(roundtrip(&fv), fv);

        let null = DbaseFieldValue::null(field);
        assert_eq!(null.render().unwrap(), b"          ".to_vec());
        assert_eq!(roundtrip(&null), null);
    }

    #[test]
    fn test_character_truncation_respects_char_boundaries() {
        // three 2-byte characters into a 3-byte field: one survives, the
        // cut falls back to the boundary and the rest is padding
        let field = DbaseField::character("NAME", 3).unwrap();
        let fv =
            DbaseFieldValue::new(field, DbaseValue::Character(Some("ééé".to_string()))).unwrap();
        let bytes = fv.render().unwrap();
        assert_eq!(bytes.len(), 3);
        assert_eq!(bytes, "é ".as_bytes());
    }

    #[test]
    fn test_int32_right_aligned() {
        let field = DbaseField::number("ID", 8, 0).unwrap();
        let fv = DbaseFieldValue::new(field, DbaseValue::Int32(Some(-42))).unwrap();
        assert_eq!(fv.render().unwrap(), b"     -42".to_vec());
        assert_eq!(roundtrip(&fv), fv);
    }

    #[test]
    fn test_decimal_uses_declared_decimal_count() {
        let field = DbaseField::number("AREA", 12, 3).unwrap();
        let fv = DbaseFieldValue::new(field, DbaseValue::Decimal(Some(12.5))).unwrap();
        assert_eq!(fv.render().unwrap(), b"      12.500".to_vec());
        assert_eq!(roundtrip(&fv), fv);
    }

    #[test]
    fn test_number_too_wide_fails() {
        let field = DbaseField::number("ID", 3, 0).unwrap();
        let fv = DbaseFieldValue::new(field, DbaseValue::Int32(Some(123456))).unwrap();
        assert!(fv.render().is_err());
    }

    #[test]
    fn test_date_packs_as_ymd() {
        let field = DbaseField::date("UPDATED").unwrap();
        let dt = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let fv = DbaseFieldValue::new(field, DbaseValue::DateTime(Some(dt))).unwrap();
        assert_eq!(fv.render().unwrap(), b"20240307".to_vec());
        assert_eq!(roundtrip(&fv), fv);
    }

    #[test]
    fn test_logical_render_and_parse() {
        let field = DbaseField::logical("ACTIVE").unwrap();
        let t = DbaseFieldValue::new(field.clone(), DbaseValue::Logical(Some(true))).unwrap();
        assert_eq!(t.render().unwrap(), b"T".to_vec());
        assert_eq!(roundtrip(&t), t);
        let null = DbaseFieldValue::null(field);
        assert_eq!(null.render().unwrap(), b"?".to_vec());
        assert_eq!(roundtrip(&null), null);
    }

    #[test]
    fn test_blank_numeric_parses_to_none() {
        let field = DbaseField::number("COUNT", 6, 0).unwrap();
        let parsed = DbaseFieldValue::parse(&field, b"      ");
        assert_eq!(parsed.value(), &DbaseValue::Int32(None));
        let garbage = DbaseFieldValue::parse(&field, b"??????");
        assert_eq!(garbage.value(), &DbaseValue::Int32(None));
    }

    #[test]
    fn test_kind_must_match_field_type() {
        let field = DbaseField::character("NAME", 10).unwrap();
        assert!(DbaseFieldValue::new(field, DbaseValue::Int32(Some(1))).is_err());
    }
}
