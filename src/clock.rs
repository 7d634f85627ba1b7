//! Reloj del juego. Cada vuelta le avisa al loop principal que paso un tick.
use std::{
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
    time::Duration,
};

use log::debug;

use crate::game::GameMessage;

pub trait Clock: Send {
    /// Bloquea hasta el proximo tick
    fn wait_tick(&mut self);
}

pub struct IntervalClock {
    interval: Duration,
}

impl IntervalClock {
    pub fn new(interval: Duration) -> IntervalClock {
        IntervalClock { interval }
    }
}

impl Clock for IntervalClock {
    fn wait_tick(&mut self) {
        thread::sleep(self.interval);
    }
}

/// Lanza el reloj en su propio hilo. Termina cuando el loop principal deja de escuchar.
pub fn spawn_clock<C: Clock + 'static>(mut clock: C, sender: Sender<GameMessage>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        clock.wait_tick();
        if sender.send(GameMessage::Tick).is_err() {
            debug!("[CLOCK] Game loop is gone, stopping");
            return;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn should_send_a_tick_every_interval() {
        let (sender, receiver) = channel();
        spawn_clock(IntervalClock::new(Duration::from_millis(1)), sender);
        for _ in 0..3 {
            let message = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(GameMessage::Tick, message);
        }
    }

    #[test]
    fn should_stop_when_nobody_listens() {
        let (sender, receiver) = channel();
        drop(receiver);
        let handle = spawn_clock(IntervalClock::new(Duration::from_millis(1)), sender);
        assert!(handle.join().is_ok());
    }
}
