use pareto_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a non-negative, finite ε
pub fn parse_epsilon(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("epsilon must be finite and >= 0, got {}", s));
    }
    Ok(value)
}

/// Parse one cost component; range checks happen when the cost is built
pub fn parse_cost_component(s: &str) -> std::result::Result<f64, String> {
    s.parse::<f64>().map_err(|e| format!("{}", e))
}
