pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod container;
pub mod errors;
pub mod events;
pub mod game;
pub mod inventory;
pub mod order;
pub mod order_generator;
pub mod orders_queue;
pub mod pizzeria;

use std::{env, io, process, sync::mpsc::channel};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use clock::{spawn_clock, IntervalClock};
use commands::spawn_input_reader;
use config::PizzeriaConfig;
use events::LogRenderer;
use game::Game;
use pizzeria::Pizzeria;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let config = match env::args().nth(1) {
        Some(path) => match PizzeriaConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("[CONFIG] {}", err);
                process::exit(1);
            }
        },
        None => PizzeriaConfig::default(),
    };

    info!("[GAME] Commands: take (t), make (m), serve (s), status (?), quit (q)");

    let (sender, receiver) = channel();
    spawn_clock(IntervalClock::new(config.tick_interval), sender.clone());
    spawn_input_reader(io::BufReader::new(io::stdin()), sender);

    let mut game = Game::new(Pizzeria::from_config(&config), LogRenderer, config.initial_orders);
    game.run(receiver);
}
