pub fn gross_earnings(hours: f64, wage: f64) -> f64 {
    hours * wage
}

/// Earnings after tax. Not rounded; formatting happens at the edges.
pub fn net_earnings(hours: f64, wage: f64, tax_rate: f64) -> f64 {
    gross_earnings(hours, wage) * (1.0 - tax_rate)
}
