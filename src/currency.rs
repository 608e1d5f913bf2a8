//! Indian-convention currency rendering (Lakhs and Crores).

/// One lakh: 100 thousand rupees.
pub const LAKH: f64 = 100_000.0;
/// One crore: 10 million rupees.
pub const CRORE: f64 = 10_000_000.0;

/// Renders an amount the way Indian listings quote prices.
///
/// Amounts of a crore or more are quoted in crores, amounts of a lakh or
/// more in lakhs, and anything smaller as a grouped whole-rupee figure.
/// Either quoted unit drops its decimal place once the figure reaches 100.
pub fn format_inr(amount: f64) -> String {
    if amount >= CRORE {
        let crores = amount / CRORE;
        if crores >= 100.0 {
            format!("₹{crores:.0} Cr")
        } else {
            format!("₹{crores:.1} Cr")
        }
    } else if amount >= LAKH {
        let lakhs = amount / LAKH;
        if lakhs >= 100.0 {
            format!("₹{lakhs:.0} L")
        } else {
            format!("₹{lakhs:.1} L")
        }
    } else {
        format!("₹{}", group_thousands(amount))
    }
}

/// Renders the supplementary fixed-precision lakh figure shown alongside the
/// primary string.
pub fn format_lakhs(amount: f64) -> String {
    format!("₹{:.1} Lakhs", amount / LAKH)
}

/// Rounds to whole rupees and inserts thousands separators.
fn group_thousands(amount: f64) -> String {
    let digits = format!("{amount:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crore_threshold_is_exact() {
        assert_eq!(format_inr(10_000_000.0), "₹1.0 Cr");
        // Just below a crore the lakh figure rounds up to 100.0 but stays in
        // the lakh tier.
        assert_eq!(format_inr(9_999_999.0), "₹100.0 L");
        // Top of the lakh tier: 99,999,999 already quotes in crores.
        assert_eq!(format_inr(99_999_999.0), "₹10.0 Cr");
    }

    #[test]
    fn large_figures_drop_the_decimal() {
        assert_eq!(format_inr(1_000_000_000.0), "₹100 Cr");
        assert_eq!(format_inr(1_500_000_000.0), "₹150 Cr");
        // 999,999,999 / 1 crore is 99.9999999, still under the 100 cutoff.
        assert_eq!(format_inr(999_999_999.0), "₹100.0 Cr");
        assert_eq!(format_inr(25_000_000.0), "₹2.5 Cr");
    }

    #[test]
    fn lakh_tier_rounds_to_one_decimal() {
        assert_eq!(format_inr(100_000.0), "₹1.0 L");
        assert_eq!(format_inr(3_550_000.0), "₹35.5 L");
        assert_eq!(format_inr(250_000.0), "₹2.5 L");
    }

    #[test]
    fn small_amounts_are_grouped_rupees() {
        assert_eq!(format_inr(50_000.0), "₹50,000");
        assert_eq!(format_inr(1_234.0), "₹1,234");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(0.0), "₹0");
    }

    #[test]
    fn lakh_rendering_is_fixed_precision() {
        assert_eq!(format_lakhs(87_960_120.0), "₹879.6 Lakhs");
        assert_eq!(format_lakhs(50_000.0), "₹0.5 Lakhs");
    }
}
