/// Formats an amount in Thai baht with thousands separators, e.g. `฿1,250`.
pub fn format_thb(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("฿{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thb() {
        assert_eq!(format_thb(0), "฿0");
        assert_eq!(format_thb(999), "฿999");
        assert_eq!(format_thb(1250), "฿1,250");
        assert_eq!(format_thb(1_000_000), "฿1,000,000");
    }
}
