//! Eventos que la pizzeria le manda a la capa de presentacion.
use log::{debug, error, info};
use serde::Serialize;

use crate::{inventory::StockLevel, order::Order};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Event {
    InventoryChanged(Vec<StockLevel>),
    OrdersChanged {
        waiting: Vec<Order>,
        active: Option<Order>,
    },
    Message { text: String, severity: Severity },
}

impl Event {
    pub fn info<S: Into<String>>(text: S) -> Event {
        Event::Message {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Event {
        Event::Message {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Lo que sea que muestre el juego al jugador
pub trait Renderer {
    fn render(&mut self, event: &Event);
}

/// Muestra los eventos por el log
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, event: &Event) {
        if let Ok(json) = serde_json::to_string(event) {
            debug!("[RENDER] {}", json);
        }
        match event {
            Event::InventoryChanged(levels) => info!("[INVENTORY] {}", inventory_line(levels)),
            Event::OrdersChanged { waiting, active } => {
                for line in order_lines(waiting, active.as_ref()) {
                    info!("[ORDERS] {}", line);
                }
            }
            Event::Message {
                text,
                severity: Severity::Info,
            } => info!("{}", text),
            Event::Message {
                text,
                severity: Severity::Error,
            } => error!("{}", text),
        }
    }
}

pub fn inventory_line(levels: &[StockLevel]) -> String {
    levels
        .iter()
        .map(|level| format!("{}: {}", capitalize(level.ingredient.name()), level.remaining))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn order_lines(waiting: &[Order], active: Option<&Order>) -> Vec<String> {
    if waiting.is_empty() && active.is_none() {
        return vec!["No new orders for now. Enjoy the peace!".to_string()];
    }
    let mut lines = Vec::new();
    if let Some(order) = active {
        lines.push(format!("Current: Pizza with {}", order.describe()));
    }
    for order in waiting {
        lines.push(format!("Waiting: Pizza with {}", order.describe()));
    }
    lines
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
