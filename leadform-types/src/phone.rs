//! Brazilian phone masking.

/// Keep only the ASCII digits of `input`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Mask a phone number as `(DD) DDDD-DDDD` (landline) or `(DD) DDDDD-DDDD` (mobile).
///
/// Any non-digit is dropped first, so the function accepts raw input, a
/// partially typed number, or its own output. Inputs with up to 10 digits use
/// the 4-digit group, longer inputs the 5-digit group. Partial input gets a
/// partial mask; fewer than three digits are returned unchanged.
///
/// ```
/// use leadform_types::format_phone_br;
///
/// assert_eq!(format_phone_br("1123456789"), "(11) 2345-6789");
/// assert_eq!(format_phone_br("11912345678"), "(11) 91234-5678");
/// assert_eq!(format_phone_br("(11) 91234-5678"), "(11) 91234-5678");
/// assert_eq!(format_phone_br("119"), "(11) 9");
/// ```
pub fn format_phone_br(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() < 3 {
        return digits;
    }

    let (area, rest) = digits.split_at(2);
    let group = if digits.len() <= 10 { 4 } else { 5 };

    if rest.len() > group {
        let (head, tail) = rest.split_at(group);
        format!("({area}) {head}-{tail}")
    } else {
        format!("({area}) {rest}")
    }
}
