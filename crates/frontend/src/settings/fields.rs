//! Typing of form inputs and construction of the settings payload.

use contracts::shared::settings::{FieldValue, SettingsPayload};

/// Kind of an `<input>` element as far as the payload is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Checkbox,
    Number,
    Text,
}

impl InputKind {
    /// Resolve from the `type` attribute. Unknown or missing types are text.
    pub fn from_type_attr(attr: &str) -> Self {
        if attr.eq_ignore_ascii_case("checkbox") {
            InputKind::Checkbox
        } else if attr.eq_ignore_ascii_case("number") {
            InputKind::Number
        } else {
            InputKind::Text
        }
    }
}

/// Snapshot of one input element taken at submission time
#[derive(Clone, Debug, PartialEq)]
pub struct FormInput {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub checked: bool,
}

impl FormInput {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Text,
            value: value.to_string(),
            checked: false,
        }
    }

    pub fn number(name: &str, value: &str) -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::text(name, value)
        }
    }

    pub fn checkbox(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Checkbox,
            value: "on".to_string(),
            checked,
        }
    }
}

/// Map an input to its payload value
pub fn field_value(kind: InputKind, raw: &str, checked: bool) -> FieldValue {
    match kind {
        InputKind::Checkbox => FieldValue::Boolean(checked),
        InputKind::Number => FieldValue::Integer(parse_int(raw)),
        InputKind::Text => FieldValue::Text(raw.to_string()),
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace, a single sign and a `0x` prefix (hexadecimal) are
/// accepted; parsing stops at the first non-digit (`"12px"` is 12, `"3.7"`
/// is 3). Returns `None` when there are no digits or the value does not fit
/// in an `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for digit in digits {
        value = value.checked_mul(i64::from(radix))?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

/// Build the payload from inputs in document order.
///
/// Inputs without a name are skipped; a later input overwrites an earlier
/// one with the same name.
pub fn build_payload<'a>(inputs: impl IntoIterator<Item = &'a FormInput>) -> SettingsPayload {
    let mut payload = SettingsPayload::new();
    for input in inputs {
        if input.name.is_empty() {
            continue;
        }
        payload.insert(
            input.name.clone(),
            field_value(input.kind, &input.value, input.checked),
        );
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_from_type_attr() {
        assert_eq!(InputKind::from_type_attr("checkbox"), InputKind::Checkbox);
        assert_eq!(InputKind::from_type_attr("CHECKBOX"), InputKind::Checkbox);
        assert_eq!(InputKind::from_type_attr("number"), InputKind::Number);
        assert_eq!(InputKind::from_type_attr("email"), InputKind::Text);
        assert_eq!(InputKind::from_type_attr("password"), InputKind::Text);
        assert_eq!(InputKind::from_type_attr(""), InputKind::Text);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("587"), Some(587));
        assert_eq!(parse_int("  42  "), Some(42));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("12px"), Some(12));
        assert_eq!(parse_int("3.7"), Some(3));
        assert_eq!(parse_int("007"), Some(7));
        assert_eq!(parse_int("0x1A"), Some(26));
        assert_eq!(parse_int("-0x10"), Some(-16));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("+-1"), None);
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_int_bounds() {
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int("9223372036854775808"), None);
    }

    #[test]
    fn test_field_value_by_kind() {
        assert_eq!(
            field_value(InputKind::Checkbox, "on", true),
            FieldValue::Boolean(true)
        );
        assert_eq!(
            field_value(InputKind::Checkbox, "on", false),
            FieldValue::Boolean(false)
        );
        assert_eq!(
            field_value(InputKind::Number, "85", false),
            FieldValue::Integer(Some(85))
        );
        assert_eq!(
            field_value(InputKind::Number, "high", false),
            FieldValue::Integer(None)
        );
        assert_eq!(
            field_value(InputKind::Text, "static/captures", false),
            FieldValue::Text("static/captures".into())
        );
    }

    #[test]
    fn test_build_payload_one_entry_per_input() {
        let inputs = vec![
            FormInput::number("DOOR_SENSOR_PIN", "16"),
            FormInput::checkbox("ENABLE_EMAIL_NOTIFICATIONS", true),
            FormInput::text("SMTP_SERVER", "smtp.example.com"),
        ];
        let payload = build_payload(&inputs);

        assert_eq!(payload.len(), 3);
        assert_eq!(
            payload.get("DOOR_SENSOR_PIN"),
            Some(&FieldValue::Integer(Some(16)))
        );
        assert_eq!(
            payload.get("ENABLE_EMAIL_NOTIFICATIONS"),
            Some(&FieldValue::Boolean(true))
        );
        assert_eq!(
            payload.get("SMTP_SERVER"),
            Some(&FieldValue::Text("smtp.example.com".into()))
        );
    }

    #[test]
    fn test_build_payload_last_write_wins() {
        let inputs = vec![
            FormInput::number("SMTP_PORT", "25"),
            FormInput::text("SMTP_USERNAME", "admin"),
            FormInput::number("SMTP_PORT", "587"),
        ];
        let payload = build_payload(&inputs);

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("SMTP_PORT"), Some(&FieldValue::Integer(Some(587))));
    }

    #[test]
    fn test_build_payload_skips_unnamed_inputs() {
        let inputs = vec![FormInput::text("", "ignored"), FormInput::text("LOG_LEVEL", "INFO")];
        let payload = build_payload(&inputs);

        assert_eq!(payload.len(), 1);
        assert!(payload.get("").is_none());
    }

    #[test]
    fn test_build_payload_empty_form() {
        assert!(build_payload(&Vec::<FormInput>::new()).is_empty());
    }
}
