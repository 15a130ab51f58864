//! Coercion of raw edited values into their declared types
//!
//! Every declared type has a total conversion: any input, including a missing
//! one, yields a value of that type. Missing and null inputs produce the
//! type's zero value. Unknown type tags pass the value through unchanged.
//! Input with no numeric reading (`"abc"`, a list of two numbers) becomes `0`
//! for numeric types, never `null`, so numeric fields always export a number.

use cfged_schema::{PropertyType, Scalar, Value};

/// Convert `value` to the canonical representation of `ty`.
pub fn coerce(value: Option<&Value>, ty: &PropertyType) -> Value {
    let value = match value {
        None | Some(Value::Null) => return zero_value(ty),
        Some(v) => v,
    };

    match ty {
        PropertyType::Int => Value::Scalar(Scalar::Int(round_or_zero(numeric(value)))),
        PropertyType::Float | PropertyType::Double => {
            Value::Scalar(Scalar::Float(numeric(value).unwrap_or(0.0)))
        }
        PropertyType::Bool => Value::Scalar(Scalar::Bool(truthy(value))),
        PropertyType::String => Value::Scalar(Scalar::Text(text(value))),
        PropertyType::IntArray => match value {
            Value::List(items) => Value::List(
                items
                    .iter()
                    .map(|s| Scalar::Int(round_or_zero(scalar_numeric(s))))
                    .collect(),
            ),
            _ => Value::List(Vec::new()),
        },
        PropertyType::FloatArray => match value {
            Value::List(items) => Value::List(
                items
                    .iter()
                    .map(|s| Scalar::Float(scalar_numeric(s).unwrap_or(0.0)))
                    .collect(),
            ),
            _ => Value::List(Vec::new()),
        },
        PropertyType::Other(_) => value.clone(),
    }
}

/// Value produced for a missing or null input.
pub fn zero_value(ty: &PropertyType) -> Value {
    match ty {
        PropertyType::Int => Value::Scalar(Scalar::Int(0)),
        PropertyType::Float | PropertyType::Double => Value::Scalar(Scalar::Float(0.0)),
        PropertyType::Bool => Value::Scalar(Scalar::Bool(false)),
        PropertyType::String => Value::Scalar(Scalar::Text(String::new())),
        PropertyType::IntArray | PropertyType::FloatArray => Value::List(Vec::new()),
        PropertyType::Other(_) => Value::Null,
    }
}

/// Round half up, as `floor(x + 0.5)`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn round_or_zero(n: Option<f64>) -> i64 {
    n.map(|x| round_half_up(x) as i64).unwrap_or(0)
}

/// Numeric reading of a value, `None` when it has none.
///
/// A list reads as its only element, or zero when empty.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Scalar(s) => scalar_numeric(s),
        Value::List(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => scalar_numeric(only),
            _ => None,
        },
    }
}

fn scalar_numeric(scalar: &Scalar) -> Option<f64> {
    let n = match scalar {
        Scalar::Bool(b) => f64::from(u8::from(*b)),
        Scalar::Int(i) => *i as f64,
        Scalar::Float(f) => *f,
        Scalar::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
    };
    n.is_finite().then_some(n)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Scalar(Scalar::Bool(b)) => *b,
        Value::Scalar(Scalar::Int(i)) => *i != 0,
        Value::Scalar(Scalar::Float(f)) => *f != 0.0 && !f.is_nan(),
        Value::Scalar(Scalar::Text(s)) => !s.is_empty(),
        Value::List(_) => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Scalar(s) => s.to_string(),
        Value::List(items) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn int() -> PropertyType {
        PropertyType::Int
    }

    #[test]
    fn test_null_int_array_is_empty() {
        assert_eq!(coerce(Some(&Value::Null), &PropertyType::IntArray), Value::List(vec![]));
    }

    #[test]
    fn test_missing_bool_is_false() {
        assert_eq!(coerce(None, &PropertyType::Bool), Value::from(false));
    }

    #[test]
    fn test_text_int_rounds() {
        assert_eq!(coerce(Some(&Value::from("3.7")), &int()), Value::from(4));
    }

    #[rstest]
    #[case(Value::from(2.5), 3)]
    #[case(Value::from(-2.5), -2)]
    #[case(Value::from(-2.6), -3)]
    #[case(Value::from(7), 7)]
    #[case(Value::from(true), 1)]
    #[case(Value::from(""), 0)]
    #[case(Value::from(" 12 "), 12)]
    #[case(Value::from("abc"), 0)]
    #[case(Value::from(vec![5_i64]), 5)]
    #[case(Value::from(vec![1_i64, 2]), 0)]
    fn test_int_coercion(#[case] input: Value, #[case] expected: i64) {
        assert_eq!(coerce(Some(&input), &int()), Value::from(expected));
    }

    #[rstest]
    #[case(PropertyType::Float)]
    #[case(PropertyType::Double)]
    fn test_float_keeps_fraction(#[case] ty: PropertyType) {
        assert_eq!(coerce(Some(&Value::from("0.125")), &ty), Value::from(0.125));
        assert_eq!(coerce(Some(&Value::from(3)), &ty), Value::from(3.0));
        assert_eq!(coerce(Some(&Value::from("NaN")), &ty), Value::from(0.0));
        assert_eq!(coerce(Some(&Value::from("abc")), &ty), Value::from(0.0));
    }

    #[rstest]
    #[case(Value::from(0), false)]
    #[case(Value::from(2), true)]
    #[case(Value::from(0.0), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("false"), true)]
    #[case(Value::from(Vec::<i64>::new()), true)]
    fn test_bool_truthiness(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(coerce(Some(&input), &PropertyType::Bool), Value::from(expected));
    }

    #[rstest]
    #[case(Value::from(true), "true")]
    #[case(Value::from(42), "42")]
    #[case(Value::from(10.0), "10")]
    #[case(Value::from(0.5), "0.5")]
    #[case(Value::from(vec![1_i64, 2]), "1,2")]
    fn test_string_rendering(#[case] input: Value, #[case] expected: &str) {
        assert_eq!(coerce(Some(&input), &PropertyType::String), Value::from(expected));
    }

    #[test]
    fn test_int_array_rounds_each_element() {
        let input = Value::List(vec![
            Scalar::Float(1.4),
            Scalar::Float(1.5),
            Scalar::Text("2.6".into()),
            Scalar::Text("x".into()),
        ]);
        assert_eq!(
            coerce(Some(&input), &PropertyType::IntArray),
            Value::from(vec![1_i64, 2, 3, 0])
        );
    }

    #[test]
    fn test_float_array_keeps_order() {
        let input = Value::List(vec![Scalar::Int(3), Scalar::Float(1.5), Scalar::Text("2".into())]);
        assert_eq!(
            coerce(Some(&input), &PropertyType::FloatArray),
            Value::from(vec![3.0, 1.5, 2.0])
        );
    }

    #[test]
    fn test_non_array_input_to_array_type_is_empty() {
        assert_eq!(
            coerce(Some(&Value::from(5)), &PropertyType::FloatArray),
            Value::List(vec![])
        );
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let ty = PropertyType::Other("AnimationCurve".into());
        let input = Value::from(vec![0_i64, 1]);
        assert_eq!(coerce(Some(&input), &ty), input);
        assert_eq!(coerce(None, &ty), Value::Null);
    }
}
