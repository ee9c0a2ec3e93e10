pub mod baseline;
pub mod simulate;

/// Format a vote count with thousands separators, rounded to whole votes.
pub(crate) fn fmt_votes(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { grouped.push(',') }
        grouped.push(ch);
    }
    if rounded < 0.0 { format!("-{grouped}") } else { grouped }
}

/// Like [`fmt_votes`] but always signed.
pub(crate) fn fmt_delta(value: f64) -> String {
    if value.round() >= 0.0 { format!("+{}", fmt_votes(value)) } else { fmt_votes(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt_votes(0.0), "0");
        assert_eq!(fmt_votes(999.4), "999");
        assert_eq!(fmt_votes(1000.0), "1,000");
        assert_eq!(fmt_votes(77_302_580.0), "77,302,580");
        assert_eq!(fmt_votes(-12_345.0), "-12,345");
    }

    #[test]
    fn deltas_are_signed() {
        assert_eq!(fmt_delta(1500.0), "+1,500");
        assert_eq!(fmt_delta(-20.0), "-20");
        assert_eq!(fmt_delta(0.0), "+0");
    }
}
