//! Textual rendering of values, as written by `echo`.
//!
//! | value          | rendering                      |
//! |----------------|--------------------------------|
//! | string         | bytes verbatim                 |
//! | int            | decimal                        |
//! | float          | 6 significant digits (`%.6g`)  |
//! | bool           | `1` for true, nothing for false |
//! | anything else  | `NULL`                         |

use crate::{Value, ValueData};

/// Significant digits used for float output.
const FLOAT_PRECISION: i32 = 6;

/// Append the rendering of `value` to `out`.
pub fn render_into(value: &Value, out: &mut Vec<u8>) {
    match value.data() {
        ValueData::Str(bytes) => out.extend_from_slice(bytes),
        ValueData::Int(n) => out.extend_from_slice(n.to_string().as_bytes()),
        ValueData::Float(f) => out.extend_from_slice(format_float(*f).as_bytes()),
        ValueData::Bool(true) => out.push(b'1'),
        ValueData::Bool(false) => {}
        ValueData::Null | ValueData::Array | ValueData::Object | ValueData::Resource => {
            out.extend_from_slice(b"NULL");
        }
    }
}

/// Format a float like C's `%.6g`.
///
/// Uses fixed notation when the decimal exponent is in `-4..6`, otherwise
/// exponential notation with a sign and at least two exponent digits.
/// Trailing zeros (and a trailing decimal point) are removed in both forms.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return if f.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent of the rounded
    // value decides the notation (99999.95 -> 1e+05).
    let sci = format!("{:.*e}", (FLOAT_PRECISION - 1) as usize, f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= FLOAT_PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_fraction_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = usize::try_from(FLOAT_PRECISION - 1 - exp).unwrap_or(0);
        strip_fraction_zeros(&format!("{f:.decimals$}")).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
