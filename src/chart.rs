//! Geometry for the dashboard charts
//!
//! Charts are drawn with plain CSS bars and an SVG polyline; these helpers only
//! compute the numbers.

use crate::fixtures::{BalancePoint, MonthlySpend};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Bar height of each month as a percentage of the largest month
pub fn bar_heights(months: &[MonthlySpend]) -> Vec<f64> {
    let peak = months
        .iter()
        .map(|m| m.amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    if peak <= Decimal::ZERO {
        return vec![0.0; months.len()];
    }
    months
        .iter()
        .map(|m| {
            let ratio = (m.amount.max(Decimal::ZERO) / peak) * Decimal::ONE_HUNDRED;
            ratio.round_dp(2).to_f64().unwrap_or(0.0)
        })
        .collect()
}

/// `points` attribute of an SVG polyline spanning a `width` x `height` box.
///
/// The y axis is flipped so larger balances sit higher; a flat series is drawn
/// across the vertical middle.
pub fn polyline_points(history: &[BalancePoint], width: f64, height: f64) -> String {
    let values: Vec<f64> = history
        .iter()
        .map(|p| p.balance.to_f64().unwrap_or(0.0))
        .collect();
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let span = max - min;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = step * i as f64;
            let y = if span > 0.0 {
                height - (v - min) / span * height
            } else {
                height / 2.0
            };
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(name: &str, amount: i64) -> MonthlySpend {
        MonthlySpend {
            month: name.to_string(),
            amount: Decimal::from(amount),
        }
    }

    fn point(label: &str, balance: i64) -> BalancePoint {
        BalancePoint {
            label: label.to_string(),
            balance: Decimal::from(balance),
        }
    }

    #[test]
    fn test_bar_heights_relative_to_peak() {
        let heights = bar_heights(&[month("Jul", 1800), month("Aug", 3600), month("Sep", 900)]);
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn test_bar_heights_empty_or_zero() {
        assert!(bar_heights(&[]).is_empty());
        assert_eq!(bar_heights(&[month("Jul", 0)]), vec![0.0]);
    }

    #[test]
    fn test_polyline_spans_box() {
        let points = polyline_points(&[point("a", 100), point("b", 200), point("c", 150)], 200.0, 100.0);
        assert_eq!(points, "0.0,100.0 100.0,0.0 200.0,50.0");
    }

    #[test]
    fn test_polyline_flat_series() {
        let points = polyline_points(&[point("a", 5), point("b", 5)], 10.0, 40.0);
        assert_eq!(points, "0.0,20.0 10.0,20.0");
        assert_eq!(polyline_points(&[], 10.0, 40.0), "");
    }
}
