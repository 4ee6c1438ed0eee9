use num_format::{Locale, ToFormattedString};

/// Format an amount in yen with thousands separators, e.g. `1,500円`
pub fn format_price(amount: u64) -> String {
    format!("{}円", amount.to_formatted_string(&Locale::ja))
}

/// Format the cart total line shown in the cart panel and checkout dialog
pub fn format_total(amount: u64) -> String {
    format!("合計金額：{}(税込)", format_price(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0円");
        assert_eq!(format_price(850), "850円");
        assert_eq!(format_price(1500), "1,500円");
        assert_eq!(format_price(1_234_567), "1,234,567円");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(2400), "合計金額：2,400円(税込)");
    }
}
