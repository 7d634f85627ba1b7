//! Lectura de los comandos del jugador.
use std::{
    io::BufRead,
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};

use log::{debug, error};

use crate::game::GameMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TakeOrder,
    MakePizza,
    ServeOrder,
    Status,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` para las lineas vacias
    pub fn parse(line: &str) -> Option<Command> {
        let word = line.trim().to_lowercase();
        let command = match word.as_str() {
            "" => return None,
            "take" | "t" => Command::TakeOrder,
            "make" | "m" => Command::MakePizza,
            "serve" | "s" => Command::ServeOrder,
            "status" | "?" => Command::Status,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        };
        Some(command)
    }
}

/// Lee comandos linea por linea y se los pasa al loop principal. Al terminar la entrada avisa.
pub fn spawn_input_reader<R>(reader: R, sender: Sender<GameMessage>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    error!("[INPUT] Error while reading a command: {}", err);
                    break;
                }
            };
            if let Some(command) = Command::parse(&line) {
                debug!("[INPUT] Read {:?}", command);
                if sender.send(GameMessage::Command(command)).is_err() {
                    return;
                }
            }
        }
        let _ = sender.send(GameMessage::InputClosed);
    })
}
