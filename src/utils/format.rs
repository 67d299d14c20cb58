// ============================================================================
// FORMAT - Display formatting helpers
// ============================================================================

/// Format an amount the way every page displays money: `€x.xx`.
pub fn euro(amount: f64) -> String {
    format!("€{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_places() {
        assert_eq!(euro(20.0), "€20.00");
        assert_eq!(euro(7.5), "€7.50");
        assert_eq!(euro(0.0), "€0.00");
    }

    #[test]
    fn rounds_half_cent() {
        assert_eq!(euro(12.345), "€12.35");
    }
}
