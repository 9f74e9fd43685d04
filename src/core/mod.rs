mod effects;
mod reducer;

pub use reducer::{spawn_app_actor, spawn_app_actor_with};
