use std::collections::HashMap;

/// A single cell, typed on parse.
///
/// Numbers keep the text they were read from, so `007` still prints as `007`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Empty,
    Number(f64, String),
    Text(String),
}

impl Scalar {
    /// Numeric-looking text becomes a number; blank becomes `Empty`.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Scalar::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Scalar::Number(n, trimmed.to_string()),
            _ => Scalar::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n, _) => Some(*n),
            Scalar::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Scalar::Empty => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Scalar::Empty => String::new(),
            Scalar::Number(_, raw) => raw.clone(),
            Scalar::Text(s) => s.clone(),
        }
    }
}

/// One record of an uploaded table, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    cells: HashMap<String, Scalar>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, column: &str, value: Scalar) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: Scalar) {
        self.cells.insert(column.to_string(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Scalar> {
        self.cells.get(column)
    }

    /// Text form of a column, trimmed. Missing columns read as empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column)
            .map(Scalar::as_text)
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Numeric value of a column, `0.0` when missing or unparseable.
    pub fn number(&self, column: &str) -> f64 {
        self.get(column).and_then(Scalar::as_number).unwrap_or(0.0)
    }

    pub fn champion(&self) -> String {
        self.text("champion_name")
    }
}
