use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::action::Action;
use crate::engine::entity::Player;
use crate::map::{MAP_SIZE, Map};

const LOG_CAP: usize = 6;

/// Chance per step, while clear-headed, of the mist event striking.
const MIST_CHANCE: f64 = 0.04;
const MIST_TURNS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Title,
    Playing,
}

pub struct World {
    pub map: Map,
    pub player: Player,
    pub procedural: bool,
    pub seed: u64,
    pub state: GameState,
    pub logs: VecDeque<String>,

    rng: StdRng,
}

impl World {
    pub fn new(seed: u64) -> Self {
        let center = (MAP_SIZE / 2) as i32;

        let mut logs = VecDeque::new();
        logs.push_back(format!("Seed: {}", seed));
        logs.push_back("Move with WASD or arrow keys.".to_string());
        logs.push_back("Press R to reshape a procedural map.".to_string());

        Self {
            map: Map::new(false, seed),
            player: Player::new(center, center),
            procedural: false,
            seed,
            state: GameState::Title,
            logs,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > LOG_CAP {
            self.logs.pop_front();
        }
    }

    fn start(&mut self, procedural: bool) {
        let center = (MAP_SIZE / 2) as i32;
        self.procedural = procedural;
        self.map = Map::new(procedural, self.seed);
        self.player.x = center;
        self.player.y = center;
        self.state = GameState::Playing;
        if procedural {
            self.push_log("You wander into uncharted wilds.");
        } else {
            self.push_log("You set out across familiar ground.");
        }
    }

    fn step(&mut self, dx: i32, dy: i32) {
        let was_confused = self.player.is_confused();

        self.map.move_player(&mut self.player, dx, dy, &mut self.rng);

        if was_confused {
            if self.player.is_confused() {
                self.push_log(format!(
                    "You stumble, head spinning. ({} turns left)",
                    self.player.confusion
                ));
            } else {
                self.push_log("Your head clears.");
            }
        } else if self.rng.gen_bool(MIST_CHANCE) {
            self.player.confuse(MIST_TURNS);
            self.push_log("A strange mist clouds your mind!");
        }
    }

    fn regenerate(&mut self) {
        if !self.procedural {
            self.push_log("This land does not change.");
            return;
        }
        let center = (MAP_SIZE / 2) as i32;
        self.seed = self.rng.r#gen();
        self.map = Map::new(true, self.seed);
        self.player.x = center;
        self.player.y = center;
        self.push_log(format!("The land reshapes itself. (seed {})", self.seed));
    }

    /// Returns false when the game should exit.
    pub fn apply_action(&mut self, action: Action) -> bool {
        match self.state {
            GameState::Title => match action {
                Action::NewGame(procedural) => self.start(procedural),
                Action::Quit => return false,
                _ => {}
            },

            GameState::Playing => match action {
                Action::Move(dx, dy) => self.step(dx, dy),
                Action::Regenerate => self.regenerate(),
                Action::Quit => return false,
                _ => {}
            },
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_title_and_quits() {
        let mut world = World::new(1);
        assert_eq!(world.state, GameState::Title);
        assert!(world.apply_action(Action::None));
        assert!(!world.apply_action(Action::Quit));
    }

    #[test]
    fn new_game_spawns_player_on_walkable_center() {
        for procedural in [false, true] {
            let mut world = World::new(5);
            world.apply_action(Action::NewGame(procedural));
            assert_eq!(world.state, GameState::Playing);
            let c = (MAP_SIZE / 2) as i32;
            assert_eq!((world.player.x, world.player.y), (c, c));
            assert!(world.map.is_walkable(c, c));
        }
    }

    #[test]
    fn regenerate_is_a_no_op_on_the_fixed_map() {
        let mut world = World::new(2);
        world.apply_action(Action::NewGame(false));
        let before = world.map.tiles.clone();
        world.apply_action(Action::Regenerate);
        assert_eq!(world.map.tiles, before);
    }

    #[test]
    fn regenerate_rerolls_a_procedural_map() {
        let mut world = World::new(3);
        world.apply_action(Action::NewGame(true));
        let before = world.map.tiles.clone();
        world.apply_action(Action::Regenerate);
        assert_ne!(world.map.tiles, before);
        let c = (MAP_SIZE / 2) as i32;
        assert_eq!((world.player.x, world.player.y), (c, c));
    }

    #[test]
    fn mist_event_eventually_confuses() {
        let mut world = World::new(8);
        world.apply_action(Action::NewGame(false));

        let mut struck = false;
        for _ in 0..500 {
            world.apply_action(Action::Move(0, 0));
            if world.player.is_confused() {
                struck = true;
                break;
            }
        }
        assert!(struck, "mist never fired in 500 steps");
    }

    #[test]
    fn player_only_ever_rests_on_walkable_ground() {
        let mut world = World::new(13);
        world.apply_action(Action::NewGame(true));

        let deltas = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        for i in 0..200 {
            let (dx, dy) = deltas[i % 4];
            world.apply_action(Action::Move(dx, dy));
            assert!(world.map.is_walkable(world.player.x, world.player.y));
        }
    }
}
