pub mod joke;
pub mod timestamp;

pub use joke::{JokeRecord, JokeStats, NewJoke};
