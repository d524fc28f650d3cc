#[derive(Debug, Clone, Copy)]
pub enum Action {
    Move(i32, i32),

    /// Leave the title screen; true selects the procedural map.
    NewGame(bool),
    /// Reroll the map from a fresh seed (procedural mode only).
    Regenerate,

    Quit,
    None,
}
