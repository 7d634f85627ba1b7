use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{
    constants::{MAX_EXTRA_TOPPINGS, MIN_EXTRA_TOPPINGS},
    order::{Order, OrderId, EXTRA_TOPPINGS},
};

/// Genera los pedidos de los clientes. Es duenio del generador aleatorio y del proximo id.
pub struct OrderGenerator {
    rng: StdRng,
    next_id: u64,
}

impl OrderGenerator {
    pub fn new() -> OrderGenerator {
        OrderGenerator::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> OrderGenerator {
        OrderGenerator::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> OrderGenerator {
        OrderGenerator { rng, next_id: 0 }
    }

    /// Pedido nuevo en espera: los ingredientes base y entre 1 y 3 extras distintos
    pub fn generate(&mut self) -> Order {
        let amount = self.rng.gen_range(MIN_EXTRA_TOPPINGS, MAX_EXTRA_TOPPINGS + 1);
        let mut extras: Vec<_> = EXTRA_TOPPINGS
            .choose_multiple(&mut self.rng, amount)
            .cloned()
            .collect();
        extras.shuffle(&mut self.rng);

        let order = Order::new(self.issue_id(), &extras);
        debug!("[GENERATOR] Created order {} with {}", order.id, order.describe());
        order
    }

    /// Tira la moneda del tick
    pub fn roll(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    fn issue_id(&mut self) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        OrderGenerator::new()
    }
}
