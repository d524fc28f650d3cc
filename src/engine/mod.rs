pub mod action;
pub mod entity;
pub mod game_loop;
pub mod world;
