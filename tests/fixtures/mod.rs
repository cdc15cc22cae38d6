//! Serializable types shared by the integration tests.
#![allow(dead_code)]

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: u64,
    pub customer: String,
    pub lines: Vec<OrderLine>,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    pub sku: &'static str,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cents(pub i64);

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum Status {
    Pending,
    Shipped { carrier: &'static str },
}

pub fn order(id: u64, quantities: &[u32]) -> Order {
    Order {
        id,
        customer: "ada".to_string(),
        lines: quantities
            .iter()
            .enumerate()
            .map(|(i, &quantity)| OrderLine {
                sku: ["A-1", "B-2", "C-3", "D-4"][i % 4],
                quantity,
            })
            .collect(),
        tags: BTreeMap::from([("channel".to_string(), "web".to_string())]),
    }
}
