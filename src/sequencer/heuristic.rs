/// Placeholder metric for stops without coordinates: the difference in
/// address length plus the difference of the first character codes.
///
/// Lengths and codes are counted in UTF-16 code units. Returns infinity when
/// either address is empty since there is no first character to compare.
/// Not a metric and not related to physical proximity.
pub fn address_distance(a: &str, b: &str) -> f64 {
    let (Some(first_a), Some(first_b)) = (a.encode_utf16().next(), b.encode_utf16().next())
    else {
        return f64::INFINITY;
    };
    let len_a = a.encode_utf16().count() as f64;
    let len_b = b.encode_utf16().count() as f64;
    (len_a - len_b).abs() + (f64::from(first_a) - f64::from(first_b)).abs()
}
