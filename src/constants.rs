//! Parametros por defecto de la pizzeria

/// Stock inicial de cada ingrediente
pub const INITIAL_STOCK: u64 = 1000;

/// Cada cuanto tiempo se evalua si llega un cliente nuevo
pub const TICK_INTERVAL_IN_MS: u64 = 5000;

/// Probabilidad de que llegue un cliente en cada tick
pub const NEW_CUSTOMER_PROBABILITY: f64 = 0.3;

/// A partir de esta cantidad de pedidos en espera el tick deja de generar clientes
pub const MAX_WAITING_ORDERS: usize = 3;

/// Minimo de ingredientes extra en un pedido
pub const MIN_EXTRA_TOPPINGS: usize = 1;

/// Maximo de ingredientes extra en un pedido
pub const MAX_EXTRA_TOPPINGS: usize = 3;

/// Pedidos con los que arranca el juego
pub const INITIAL_ORDERS: usize = 2;
