//! Configuracion opcional del juego, leida de un archivo JSON.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::{
    constants::{
        INITIAL_ORDERS, INITIAL_STOCK, MAX_WAITING_ORDERS, NEW_CUSTOMER_PROBABILITY,
        TICK_INTERVAL_IN_MS,
    },
    errors::ConfigError,
    inventory::Inventory,
    order::{Ingredient, ALL_INGREDIENTS},
};

/// Forma del archivo. Todos los campos son opcionales.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct JsonConfig {
    initial_stock: Option<u64>,
    stock: Option<HashMap<Ingredient, u64>>,
    tick_interval_ms: Option<u64>,
    new_customer_probability: Option<f64>,
    max_waiting_orders: Option<usize>,
    initial_orders: Option<usize>,
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PizzeriaConfig {
    pub stock: HashMap<Ingredient, u64>,
    pub tick_interval: Duration,
    pub new_customer_probability: f64,
    pub max_waiting_orders: usize,
    pub initial_orders: usize,
    pub seed: Option<u64>,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        PizzeriaConfig {
            stock: uniform_stock(INITIAL_STOCK),
            tick_interval: Duration::from_millis(TICK_INTERVAL_IN_MS),
            new_customer_probability: NEW_CUSTOMER_PROBABILITY,
            max_waiting_orders: MAX_WAITING_ORDERS,
            initial_orders: INITIAL_ORDERS,
            seed: None,
        }
    }
}

impl PizzeriaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PizzeriaConfig, ConfigError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let json: JsonConfig = serde_json::from_reader(reader)?;
        info!("[CONFIG] Loaded {}", path.as_ref().display());
        PizzeriaConfig::from_json(json)
    }

    pub fn parse(content: &str) -> Result<PizzeriaConfig, ConfigError> {
        let json: JsonConfig = serde_json::from_str(content)?;
        PizzeriaConfig::from_json(json)
    }

    fn from_json(json: JsonConfig) -> Result<PizzeriaConfig, ConfigError> {
        let defaults = PizzeriaConfig::default();

        let mut stock = uniform_stock(json.initial_stock.unwrap_or(INITIAL_STOCK));
        if let Some(overrides) = json.stock {
            stock.extend(overrides);
        }

        let probability = json
            .new_customer_probability
            .unwrap_or(defaults.new_customer_probability);
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidValue(format!(
                "new_customer_probability must be between 0 and 1, got {}",
                probability
            )));
        }

        let tick_interval = match json.tick_interval_ms {
            Some(0) => {
                return Err(ConfigError::InvalidValue(
                    "tick_interval_ms must be greater than 0".to_string(),
                ))
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tick_interval,
        };

        Ok(PizzeriaConfig {
            stock,
            tick_interval,
            new_customer_probability: probability,
            max_waiting_orders: json.max_waiting_orders.unwrap_or(defaults.max_waiting_orders),
            initial_orders: json.initial_orders.unwrap_or(defaults.initial_orders),
            seed: json.seed,
        })
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::from_quantities(self.stock.iter().map(|(i, q)| (*i, *q)))
    }
}

fn uniform_stock(quantity: u64) -> HashMap<Ingredient, u64> {
    ALL_INGREDIENTS.iter().map(|i| (*i, quantity)).collect()
}
