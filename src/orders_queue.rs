//! Representacion de la cola de pedidos en espera
use std::collections::VecDeque;

use crate::order::Order;

/// Cola FIFO de pedidos que todavia no tomo el jugador.
pub struct OrdersQueue {
    orders: VecDeque<Order>,
}

impl OrdersQueue {
    pub fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
        }
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn pop(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Copia de los pedidos en el orden en que van a ser atendidos
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.iter().cloned().collect()
    }
}

impl Default for OrdersQueue {
    fn default() -> Self {
        OrdersQueue::new()
    }
}
