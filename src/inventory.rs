//! Inventario de ingredientes de la pizzeria.
use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::{
    container::Container,
    errors::PizzeriaError,
    order::{Ingredient, ALL_INGREDIENTS},
};

/// Cantidad restante de un ingrediente al momento de tomar la foto del inventario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub ingredient: Ingredient,
    pub remaining: u64,
    pub consumed: u64,
}

pub struct Inventory {
    resources: HashMap<Ingredient, Container>,
}

impl Inventory {
    /// Inventario con la misma cantidad de cada ingrediente
    pub fn with_stock(initial_stock: u64) -> Inventory {
        Inventory::from_quantities(ALL_INGREDIENTS.iter().map(|i| (*i, initial_stock)))
    }

    /// Los ingredientes que no aparecen arrancan vacios
    pub fn from_quantities<I>(quantities: I) -> Inventory
    where
        I: IntoIterator<Item = (Ingredient, u64)>,
    {
        let mut resources: HashMap<Ingredient, Container> = ALL_INGREDIENTS
            .iter()
            .map(|ingredient| (*ingredient, Container::new(0)))
            .collect();
        for (ingredient, quantity) in quantities {
            resources.insert(ingredient, Container::new(quantity));
        }
        Inventory { resources }
    }

    pub fn remaining(&self, ingredient: Ingredient) -> u64 {
        self.resources
            .get(&ingredient)
            .map(|container| container.remaining)
            .unwrap_or(0)
    }

    /// Ingredientes que no alcanzan para la lista pedida, sin repetir y en el orden de la lista.
    /// Cada aparicion de un ingrediente en la lista cuenta como una unidad.
    pub fn missing(&self, toppings: &[Ingredient]) -> Vec<Ingredient> {
        let required = count_occurrences(toppings);
        let mut missing = Vec::new();
        for ingredient in toppings {
            if missing.contains(ingredient) {
                continue;
            }
            let needed = required.get(ingredient).copied().unwrap_or(0);
            let enough = self
                .resources
                .get(ingredient)
                .map(|container| container.has(needed))
                .unwrap_or(false);
            if !enough {
                missing.push(*ingredient);
            }
        }
        missing
    }

    /// Descuenta una unidad por cada aparicion en `toppings`. Si falta algo no descuenta nada.
    pub fn consume(&mut self, toppings: &[Ingredient]) -> Result<(), PizzeriaError> {
        let missing = self.missing(toppings);
        if !missing.is_empty() {
            return Err(PizzeriaError::MissingIngredients(missing));
        }
        for ingredient in toppings {
            let container = self
                .resources
                .get_mut(ingredient)
                .ok_or_else(|| PizzeriaError::MissingIngredients(vec![*ingredient]))?;
            if !container.take(1) {
                return Err(PizzeriaError::MissingIngredients(vec![*ingredient]));
            }
            debug!(
                "[INVENTORY] Used 1 of {}, remains {}",
                ingredient, container.remaining
            );
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<StockLevel> {
        ALL_INGREDIENTS
            .iter()
            .map(|ingredient| {
                let container = self
                    .resources
                    .get(ingredient)
                    .copied()
                    .unwrap_or_else(|| Container::new(0));
                StockLevel {
                    ingredient: *ingredient,
                    remaining: container.remaining,
                    consumed: container.consumed,
                }
            })
            .collect()
    }
}

fn count_occurrences(toppings: &[Ingredient]) -> HashMap<Ingredient, u64> {
    let mut counts = HashMap::new();
    for ingredient in toppings {
        *counts.entry(*ingredient).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_of_each_base() -> Inventory {
        Inventory::from_quantities(vec![
            (Ingredient::Dough, 4),
            (Ingredient::TomatoSauce, 4),
            (Ingredient::Cheese, 4),
            (Ingredient::Ham, 1),
        ])
    }

    #[test]
    fn should_start_every_ingredient_with_the_same_stock() {
        let inventory = Inventory::with_stock(1000);
        for level in inventory.snapshot() {
            assert_eq!(1000, level.remaining);
            assert_eq!(0, level.consumed);
        }
        assert_eq!(ALL_INGREDIENTS.len(), inventory.snapshot().len());
    }

    #[test]
    fn should_treat_unlisted_ingredients_as_empty() {
        let inventory = four_of_each_base();
        assert_eq!(0, inventory.remaining(Ingredient::Olives));
        assert_eq!(vec![Ingredient::Olives], inventory.missing(&[Ingredient::Olives]));
    }

    #[test]
    fn should_decrement_once_per_occurrence() {
        let mut inventory = four_of_each_base();
        let toppings = [
            Ingredient::Dough,
            Ingredient::TomatoSauce,
            Ingredient::Cheese,
            Ingredient::Cheese,
            Ingredient::Ham,
        ];
        assert!(inventory.consume(&toppings).is_ok());
        assert_eq!(3, inventory.remaining(Ingredient::Dough));
        assert_eq!(3, inventory.remaining(Ingredient::TomatoSauce));
        assert_eq!(2, inventory.remaining(Ingredient::Cheese));
        assert_eq!(0, inventory.remaining(Ingredient::Ham));
        assert_eq!(0, inventory.remaining(Ingredient::Onion));
    }

    #[test]
    fn should_reject_duplicates_that_exceed_the_stock() {
        let mut inventory = four_of_each_base();
        let result = inventory.consume(&[Ingredient::Ham, Ingredient::Ham]);
        assert_eq!(
            Err(PizzeriaError::MissingIngredients(vec![Ingredient::Ham])),
            result
        );
        assert_eq!(1, inventory.remaining(Ingredient::Ham));
    }

    #[test]
    fn should_not_consume_anything_when_one_ingredient_is_missing() {
        let mut inventory = four_of_each_base();
        let before = inventory.snapshot();
        let result = inventory.consume(&[
            Ingredient::Dough,
            Ingredient::Mushrooms,
            Ingredient::Onion,
        ]);
        assert_eq!(
            Err(PizzeriaError::MissingIngredients(vec![
                Ingredient::Mushrooms,
                Ingredient::Onion
            ])),
            result
        );
        assert_eq!(before, inventory.snapshot());
    }
}
