/// One grid cell. Stored in the grid as a `u8` (0 dead, 1 alive) so the
/// state indexes lookup tables directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    /// Any nonzero state counts as alive.
    pub fn from_state(state: u8) -> Self {
        Self::new(state != 0)
    }

    pub fn state(self) -> u8 {
        self.alive as u8
    }

    pub fn is_alive(self) -> bool {
        self.alive
    }
}
