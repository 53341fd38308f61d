use crate::chart::{ChartError, TypeChart};
use serde::Deserialize;
use std::collections::HashMap;

/// On-disk chart format: the ordered type list and the square multiplier
/// table, rows = attacker in the same order.
#[derive(Debug, Deserialize)]
pub struct ChartFile {
    pub types: Vec<String>,
    pub multipliers: Vec<Vec<f64>>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

impl ChartFile {
    pub fn into_chart(self) -> Result<TypeChart, ChartError> {
        TypeChart::new(self.types, self.multipliers)
    }
}
