#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,

    pub hp: i32,
    pub max_hp: i32,

    /// Turns of confusion left. Only ticks down inside `Map::move_player`;
    /// only goes up through `confuse`.
    pub confusion: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        let max_hp = 30;
        Self {
            x,
            y,
            hp: max_hp,
            max_hp,
            confusion: 0,
        }
    }

    pub fn confuse(&mut self, turns: u32) {
        self.confusion = self.confusion.saturating_add(turns);
    }

    pub fn is_confused(&self) -> bool {
        self.confusion > 0
    }
}
