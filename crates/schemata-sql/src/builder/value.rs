use schemata_core::{
    schema::{Attribute, Entity, TypeCategory},
    stmt::Value,
    Error, Result,
};

use rust_decimal::Decimal;

/// Types caller text for `attribute`.
///
/// Character and temporal columns keep the text as is and the database
/// converts it. Every other category is parsed here so it can be bound with
/// its own parameter type.
pub fn typed_value(entity: &Entity, attribute: &Attribute, text: &str) -> Result<Value> {
    let invalid = |reason: &str| {
        Error::invalid_value(format!("{}.{}", entity.name, attribute.name), text, reason)
    };

    let trimmed = text.trim();

    match attribute.ty.category() {
        TypeCategory::Character | TypeCategory::Temporal => Ok(Value::String(text.to_string())),
        TypeCategory::Integer => trimmed
            .parse::<i64>()
            .map(Value::I64)
            .map_err(|_| invalid("expected an integer")),
        TypeCategory::Decimal => trimmed
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Value::Decimal)
            .map_err(|_| invalid("expected a decimal number")),
        TypeCategory::Float => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Value::F64(value)),
            _ => Err(invalid("expected a finite number")),
        },
        TypeCategory::Boolean => parse_bool(trimmed)
            .map(Value::Bool)
            .ok_or_else(|| invalid("expected a boolean")),
        TypeCategory::Binary => parse_hex(trimmed)
            .map(Value::Bytes)
            .ok_or_else(|| invalid("expected hex-encoded bytes")),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    const TRUE: &[&str] = &["1", "true", "t", "yes"];
    const FALSE: &[&str] = &["0", "false", "f", "no"];

    if TRUE.iter().any(|name| name.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE.iter().any(|name| name.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix("\\x"))
        .unwrap_or(text);

    if digits.len() % 2 != 0 {
        return None;
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        })
        .collect()
}

/// The delete heuristic: text that reads as a finite number is compared with
/// `=`, anything else is matched with `LIKE`.
pub(super) fn numeric_literal(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(Value::I64(value));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Value::F64(value)),
        _ => None,
    }
}
