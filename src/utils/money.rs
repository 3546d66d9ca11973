//! Currency display helpers (Colombian pesos, integer amounts).

/// Format an amount with a dollar sign and thousands separators, e.g. `$60,000`.
pub fn format_cop(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_cop;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_cop(0), "$0");
        assert_eq!(format_cop(7500), "$7,500");
        assert_eq!(format_cop(60_000), "$60,000");
        assert_eq!(format_cop(1_234_567), "$1,234,567");
    }
}
