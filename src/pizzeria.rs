//! Estado del juego y las operaciones que lo modifican.
//!
//! Cada operacion corre hasta el final antes de la siguiente. Si una operacion se rechaza
//! devuelve el error y deja el estado como estaba; si se completa devuelve los eventos que
//! la capa de presentacion tiene que mostrar.
use log::debug;

use crate::{
    config::PizzeriaConfig,
    constants::{MAX_WAITING_ORDERS, NEW_CUSTOMER_PROBABILITY},
    errors::PizzeriaError,
    events::Event,
    inventory::{Inventory, StockLevel},
    order::{Ingredient, Order, OrderId, OrderStatus},
    order_generator::OrderGenerator,
    orders_queue::OrdersQueue,
};

pub struct Pizzeria {
    inventory: Inventory,
    waiting: OrdersQueue,
    active: Option<Order>,
    oven: Option<Order>,
    generator: OrderGenerator,
    new_customer_probability: f64,
    max_waiting_orders: usize,
}

impl Pizzeria {
    pub fn new(inventory: Inventory, generator: OrderGenerator) -> Pizzeria {
        Pizzeria {
            inventory,
            waiting: OrdersQueue::new(),
            active: None,
            oven: None,
            generator,
            new_customer_probability: NEW_CUSTOMER_PROBABILITY,
            max_waiting_orders: MAX_WAITING_ORDERS,
        }
    }

    pub fn from_config(config: &PizzeriaConfig) -> Pizzeria {
        let generator = match config.seed {
            Some(seed) => OrderGenerator::with_seed(seed),
            None => OrderGenerator::new(),
        };
        let mut pizzeria = Pizzeria::new(config.inventory(), generator);
        pizzeria.new_customer_probability = config.new_customer_probability;
        pizzeria.max_waiting_orders = config.max_waiting_orders;
        pizzeria
    }

    pub fn with_new_customer_probability(mut self, probability: f64) -> Pizzeria {
        self.new_customer_probability = probability;
        self
    }

    /// Toma el primer pedido en espera. Si no hay ninguno llega un cliente nuevo,
    /// pero su pedido queda en espera.
    pub fn take_order(&mut self) -> Result<Vec<Event>, PizzeriaError> {
        if self.active.is_some() {
            return Err(PizzeriaError::OrderAlreadyInProgress);
        }

        let message = match self.waiting.pop() {
            Some(mut order) => {
                order.status = OrderStatus::Making;
                debug!("[PIZZERIA] Took order {}", order.id);
                let message =
                    Event::info(format!("You took an order for a pizza with {}.", order.describe()));
                self.active = Some(order);
                message
            }
            None => {
                self.spawn_customer();
                Event::info("A new customer just arrived!")
            }
        };
        Ok(vec![message, self.orders_changed()])
    }

    pub fn make_pizza(&mut self) -> Result<Vec<Event>, PizzeriaError> {
        let toppings = match &self.active {
            Some(order) => order.toppings.clone(),
            None => return Err(PizzeriaError::NoActiveOrder),
        };
        if self.oven.is_some() {
            return Err(PizzeriaError::OvenOccupied);
        }

        self.inventory.consume(&toppings)?;

        let mut order = self.active.take().ok_or(PizzeriaError::NoActiveOrder)?;
        order.status = OrderStatus::Ready;
        debug!("[PIZZERIA] Order {} is in the oven", order.id);
        let message = Event::info(format!("Making a pizza with {}...", order.describe()));
        self.oven = Some(order);

        Ok(vec![
            self.inventory_changed(),
            self.orders_changed(),
            message,
        ])
    }

    pub fn serve_order(&mut self) -> Result<Vec<Event>, PizzeriaError> {
        match &self.oven {
            Some(pizza) if pizza.status == OrderStatus::Ready => {}
            _ => return Err(PizzeriaError::NoReadyPizza),
        }
        let pizza = self.oven.take().ok_or(PizzeriaError::NoReadyPizza)?;
        debug!("[PIZZERIA] Served order {}", pizza.id);
        Ok(vec![
            Event::info(format!("Served pizza with {}! Good job!", pizza.describe())),
            self.orders_changed(),
        ])
    }

    /// Puede llegar un cliente, solo si la cocina esta libre y hay lugar en la cola
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.generator.roll(self.new_customer_probability) {
            return Vec::new();
        }
        if self.waiting.len() >= self.max_waiting_orders
            || self.active.is_some()
            || self.oven.is_some()
        {
            debug!("[PIZZERIA] Customer turned away, the kitchen is busy");
            return Vec::new();
        }
        self.spawn_customer();
        vec![
            Event::info("A new customer just arrived!"),
            self.orders_changed(),
        ]
    }

    /// Encola un pedido recien generado
    pub fn spawn_customer(&mut self) -> OrderId {
        let order = self.generator.generate();
        let id = order.id;
        self.enqueue(order);
        id
    }

    pub fn enqueue(&mut self, order: Order) {
        debug!("[PIZZERIA] Order {} is waiting", order.id);
        self.waiting.push(order);
    }

    pub fn orders_changed(&self) -> Event {
        Event::OrdersChanged {
            waiting: self.waiting.snapshot(),
            active: self.active.clone(),
        }
    }

    pub fn inventory_changed(&self) -> Event {
        Event::InventoryChanged(self.inventory.snapshot())
    }

    pub fn inventory(&self) -> Vec<StockLevel> {
        self.inventory.snapshot()
    }

    pub fn remaining(&self, ingredient: Ingredient) -> u64 {
        self.inventory.remaining(ingredient)
    }

    pub fn waiting_orders(&self) -> Vec<Order> {
        self.waiting.snapshot()
    }

    pub fn active_order(&self) -> Option<&Order> {
        self.active.as_ref()
    }

    pub fn pizza_in_oven(&self) -> Option<&Order> {
        self.oven.as_ref()
    }
}
