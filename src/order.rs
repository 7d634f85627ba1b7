//! Ingredientes y pedidos de la pizzeria
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ingredient {
    Dough,
    TomatoSauce,
    Cheese,
    Pepperoni,
    Mushrooms,
    Onion,
    Olives,
    Ham,
}

/// Todos los ingredientes, en el orden en que se muestra el inventario
pub const ALL_INGREDIENTS: [Ingredient; 8] = [
    Ingredient::Dough,
    Ingredient::TomatoSauce,
    Ingredient::Cheese,
    Ingredient::Pepperoni,
    Ingredient::Mushrooms,
    Ingredient::Onion,
    Ingredient::Ham,
    Ingredient::Olives,
];

/// Ingredientes que lleva cualquier pizza
pub const BASE_INGREDIENTS: [Ingredient; 3] =
    [Ingredient::Dough, Ingredient::TomatoSauce, Ingredient::Cheese];

/// Ingredientes extra que puede pedir un cliente
pub const EXTRA_TOPPINGS: [Ingredient; 5] = [
    Ingredient::Pepperoni,
    Ingredient::Mushrooms,
    Ingredient::Onion,
    Ingredient::Olives,
    Ingredient::Ham,
];

impl Ingredient {
    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Dough => "dough",
            Ingredient::TomatoSauce => "tomatoSauce",
            Ingredient::Cheese => "cheese",
            Ingredient::Pepperoni => "pepperoni",
            Ingredient::Mushrooms => "mushrooms",
            Ingredient::Onion => "onion",
            Ingredient::Olives => "olives",
            Ingredient::Ham => "ham",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Waiting,
    Making,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub toppings: Vec<Ingredient>,
    pub status: OrderStatus,
}

impl Order {
    /// Crea un pedido en espera con los ingredientes base seguidos de los extras recibidos
    pub fn new(id: OrderId, extras: &[Ingredient]) -> Order {
        let mut toppings = BASE_INGREDIENTS.to_vec();
        toppings.extend_from_slice(extras);
        Order {
            id,
            toppings,
            status: OrderStatus::Waiting,
        }
    }

    /// Lista de ingredientes separada por comas, como se le muestra al jugador
    pub fn describe(&self) -> String {
        describe_ingredients(&self.toppings)
    }
}

pub fn describe_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(Ingredient::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_the_order_with_the_base_ingredients() {
        let order = Order::new(OrderId(7), &[Ingredient::Ham, Ingredient::Olives]);
        assert_eq!(OrderId(7), order.id);
        assert_eq!(OrderStatus::Waiting, order.status);
        assert_eq!(
            vec![
                Ingredient::Dough,
                Ingredient::TomatoSauce,
                Ingredient::Cheese,
                Ingredient::Ham,
                Ingredient::Olives
            ],
            order.toppings
        );
    }

    #[test]
    fn should_describe_the_toppings_with_their_game_names() {
        let order = Order::new(OrderId(0), &[Ingredient::Pepperoni]);
        assert_eq!("dough, tomatoSauce, cheese, pepperoni", order.describe());
    }

    #[test]
    fn should_deserialize_camel_case_ingredient_names() {
        let ingredient: Ingredient = serde_json::from_str("\"tomatoSauce\"").unwrap();
        assert_eq!(Ingredient::TomatoSauce, ingredient);
    }
}
