use std::fmt;

use crate::order::{describe_ingredients, Ingredient};

/// Operaciones rechazadas por la pizzeria. El estado queda igual que antes de intentarlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PizzeriaError {
    OrderAlreadyInProgress,
    NoActiveOrder,
    OvenOccupied,
    MissingIngredients(Vec<Ingredient>),
    NoReadyPizza,
}

impl fmt::Display for PizzeriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PizzeriaError::OrderAlreadyInProgress => {
                write!(f, "You already have an order in progress!")
            }
            PizzeriaError::NoActiveOrder => write!(f, "First, take an order!"),
            PizzeriaError::OvenOccupied => write!(f, "There's already a pizza in the oven!"),
            PizzeriaError::MissingIngredients(missing) => {
                write!(f, "Missing ingredients: {}", describe_ingredients(missing))
            }
            PizzeriaError::NoReadyPizza => write!(f, "There's no ready pizza to serve!"),
        }
    }
}

impl std::error::Error for PizzeriaError {}

#[derive(Debug)]
pub enum ConfigError {
    FileReaderError(std::io::Error),
    ParseError(serde_json::Error),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileReaderError(err) => write!(f, "could not read config file: {}", err),
            ConfigError::ParseError(err) => write!(f, "invalid config file: {}", err),
            ConfigError::InvalidValue(msg) => write!(f, "invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::FileReaderError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_every_missing_ingredient() {
        let err = PizzeriaError::MissingIngredients(vec![Ingredient::Cheese, Ingredient::Pepperoni]);
        assert_eq!("Missing ingredients: cheese, pepperoni", err.to_string());
    }

    #[test]
    fn should_mention_the_ready_pizza() {
        assert!(PizzeriaError::NoReadyPizza
            .to_string()
            .to_lowercase()
            .contains("no ready pizza"));
    }
}
