/// Contenedor de un ingrediente. Lleva cuanto queda y cuanto se uso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub remaining: u64,
    pub consumed: u64,
}

impl Container {
    pub fn new(initial_capacity: u64) -> Container {
        Container {
            remaining: initial_capacity,
            consumed: 0,
        }
    }

    pub fn has(&self, quantity: u64) -> bool {
        self.remaining >= quantity
    }

    /// Saca `quantity` unidades. Devuelve false sin tocar el contenedor si no alcanza.
    pub fn take(&mut self, quantity: u64) -> bool {
        match self.remaining.checked_sub(quantity) {
            Some(remaining) => {
                self.remaining = remaining;
                self.consumed += quantity;
                true
            }
            None => false,
        }
    }
}
