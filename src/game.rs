//! Loop principal del juego. Atiende comandos y ticks de a uno por vez.
use std::sync::mpsc::Receiver;

use log::{debug, info};

use crate::{
    commands::Command,
    errors::PizzeriaError,
    events::{Event, Renderer},
    pizzeria::Pizzeria,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMessage {
    Command(Command),
    Tick,
    InputClosed,
}

pub struct Game<R: Renderer> {
    pizzeria: Pizzeria,
    renderer: R,
    initial_orders: usize,
}

impl<R: Renderer> Game<R> {
    pub fn new(pizzeria: Pizzeria, renderer: R, initial_orders: usize) -> Game<R> {
        Game {
            pizzeria,
            renderer,
            initial_orders,
        }
    }

    /// Muestra el inventario y deja algunos clientes esperando
    pub fn start(&mut self) {
        let inventory = self.pizzeria.inventory_changed();
        self.renderer.render(&inventory);
        for _ in 0..self.initial_orders {
            self.pizzeria.spawn_customer();
        }
        let orders = self.pizzeria.orders_changed();
        self.renderer.render(&orders);
        info!("[GAME] Open for business with {} customers waiting", self.initial_orders);
    }

    /// Procesa un mensaje. Devuelve false cuando el juego tiene que terminar.
    pub fn handle(&mut self, message: GameMessage) -> bool {
        debug!("[GAME] Handling {:?}", message);
        match message {
            GameMessage::Tick => {
                let events = self.pizzeria.tick();
                self.render_all(&events);
            }
            GameMessage::InputClosed | GameMessage::Command(Command::Quit) => return false,
            GameMessage::Command(Command::TakeOrder) => {
                let result = self.pizzeria.take_order();
                self.render_result(result);
            }
            GameMessage::Command(Command::MakePizza) => {
                let result = self.pizzeria.make_pizza();
                self.render_result(result);
            }
            GameMessage::Command(Command::ServeOrder) => {
                let result = self.pizzeria.serve_order();
                self.render_result(result);
            }
            GameMessage::Command(Command::Status) => {
                let events = vec![
                    self.pizzeria.inventory_changed(),
                    self.pizzeria.orders_changed(),
                ];
                self.render_all(&events);
            }
            GameMessage::Command(Command::Unknown(text)) => {
                self.renderer.render(&Event::error(format!(
                    "Unknown command '{}'. Try take, make, serve, status or quit.",
                    text
                )));
            }
        }
        true
    }

    pub fn run(&mut self, receiver: Receiver<GameMessage>) {
        self.start();
        for message in receiver.iter() {
            if !self.handle(message) {
                break;
            }
        }
        info!("[GAME] Closing the pizzeria");
    }

    pub fn pizzeria(&self) -> &Pizzeria {
        &self.pizzeria
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render_result(&mut self, result: Result<Vec<Event>, PizzeriaError>) {
        match result {
            Ok(events) => self.render_all(&events),
            Err(err) => {
                debug!("[GAME] Rejected: {:?}", err);
                self.renderer.render(&Event::error(err.to_string()));
            }
        }
    }

    fn render_all(&mut self, events: &[Event]) {
        for event in events {
            self.renderer.render(event);
        }
    }
}
