use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let reversed = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(reversed.len() + reversed.len() / 3);
    for (i, ch) in reversed.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

fn render(amount: Decimal, symbol: &str, dp: u32) -> String {
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let fixed = format!("{:.*}", dp as usize, rounded.abs());
    match fixed.split_once('.') {
        Some((whole, cents)) => format!("{}{}{},{}", sign, symbol, group_thousands(whole), cents),
        None => format!("{}{}{}", sign, symbol, group_thousands(&fixed)),
    }
}

/// Formats an amount the way es-AR locales print money: `.` groups thousands,
/// `,` separates the two decimals.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    render(amount, symbol, 2)
}

/// Rounds to whole units and drops the decimals.
pub fn format_whole(amount: Decimal, symbol: &str) -> String {
    render(amount, symbol, 0)
}

/// `12_400` becomes `$12k`; used in the centre of the distribution charts.
pub fn format_thousands(amount: Decimal, symbol: &str) -> String {
    let thousands = (amount / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{}k", symbol, thousands.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_always_carry_two_decimals() {
        assert_eq!(format_amount(dec!(0), "$"), "$0,00");
        assert_eq!(format_amount(dec!(999), "$"), "$999,00");
        assert_eq!(format_amount(dec!(1234), "$"), "$1.234,00");
        assert_eq!(format_amount(dec!(1234567), "€"), "€1.234.567,00");
    }

    #[test]
    fn cents_use_a_comma() {
        assert_eq!(format_amount(dec!(1234.5), "$"), "$1.234,50");
        assert_eq!(format_amount(dec!(0.005), "$"), "$0,01");
    }

    #[test]
    fn negatives_carry_the_sign_before_the_symbol() {
        assert_eq!(format_amount(dec!(-125000), "$"), "-$125.000,00");
        assert_eq!(format_amount(dec!(-0.001), "$"), "$0,00");
    }

    #[test]
    fn whole_rounds_half_up() {
        assert_eq!(format_whole(dec!(1499.5), "$"), "$1.500");
        assert_eq!(format_whole(dec!(1499.49), "$"), "$1.499");
        assert_eq!(format_whole(dec!(-0.4), "$"), "$0");
    }

    #[test]
    fn thousands_for_chart_centres() {
        assert_eq!(format_thousands(dec!(12400), "$"), "$12k");
        assert_eq!(format_thousands(dec!(500), "€"), "€1k");
        assert_eq!(format_thousands(dec!(0), "$"), "$0k");
    }
}
