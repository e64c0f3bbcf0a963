//! Plain-language summary sentences

use super::aggregate::Aggregates;

/// Currency prefix used when none is configured
pub const DEFAULT_CURRENCY: &str = "R";

/// Four fixed-template sentences: top category, average, forecast, anomalies
pub fn insights(aggregates: &Aggregates, forecast: f64, anomalies: usize) -> Vec<String> {
    insights_with_currency(aggregates, forecast, anomalies, DEFAULT_CURRENCY)
}

pub fn insights_with_currency(
    aggregates: &Aggregates,
    forecast: f64,
    anomalies: usize,
    currency: &str,
) -> Vec<String> {
    let forecast_line = if forecast != 0.0 {
        format!("Forecasted next month spend: {} {:.2}.", currency, forecast)
    } else {
        "Upload more monthly data for stronger forecasting.".to_string()
    };

    vec![
        format!(
            "Your highest spend category is {}.",
            aggregates.strongest_category
        ),
        format!(
            "Average transaction value is {} {:.2}.",
            currency, aggregates.average
        ),
        forecast_line,
        format!("Detected {} unusual transaction(s).", anomalies),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates() -> Aggregates {
        Aggregates {
            total: 350.0,
            average: 116.67,
            category_totals: vec![("Groceries".to_string(), 200.0)],
            strongest_category: "Groceries".to_string(),
            expense_split: vec![],
        }
    }

    #[test]
    fn test_insights_with_forecast() {
        let lines = insights(&aggregates(), 250.0, 1);
        assert_eq!(
            lines,
            vec![
                "Your highest spend category is Groceries.",
                "Average transaction value is R 116.67.",
                "Forecasted next month spend: R 250.00.",
                "Detected 1 unusual transaction(s).",
            ]
        );
    }

    #[test]
    fn test_insights_without_forecast() {
        let lines = insights(&aggregates(), 0.0, 0);
        assert_eq!(lines[2], "Upload more monthly data for stronger forecasting.");
        assert_eq!(lines[3], "Detected 0 unusual transaction(s).");
    }

    #[test]
    fn test_insights_negative_forecast_is_reported() {
        let lines = insights_with_currency(&aggregates(), -12.5, 0, "$");
        assert_eq!(lines[1], "Average transaction value is $ 116.67.");
        assert_eq!(lines[2], "Forecasted next month spend: $ -12.50.");
    }
}
