/// Fraction digits needed to print any finite `f64` exactly (2^-1074 is the
/// smallest subnormal).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which every `f64` is an integer.
const INTEGRAL_MAGNITUDE: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds `value` to `places` decimal places.
///
/// The decision is made on the exact decimal expansion of the binary value,
/// rounding half away from zero, so `2.675` (stored as `2.67499...`) rounds
/// to `2.67` while an exactly representable `0.125` rounds to `0.13`.
/// Non-finite values and values too large to carry a fraction are returned
/// unchanged. Negative zero is normalized to `0.0`.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_MAGNITUDE {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((integer, fraction)) = exact.split_once('.') else {
        return value;
    };
    let fraction = fraction.as_bytes();

    let mut digits = integer.as_bytes().to_vec();
    digits.extend_from_slice(&fraction[..places]);
    if fraction[places] >= b'5' {
        increment(&mut digits);
    }

    let integer_len = digits.len() - places;
    let mut magnitude = digits[..integer_len]
        .iter()
        .map(|&d| char::from(d))
        .collect::<String>();
    if places > 0 {
        magnitude.push('.');
        magnitude.extend(digits[integer_len..].iter().map(|&d| char::from(d)));
    }

    let Ok(magnitude) = magnitude.parse::<f64>() else {
        return value;
    };
    magnitude.copysign(value) + 0.0
}

/// Adds one to a string of ASCII decimal digits, growing it on carry-out.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
