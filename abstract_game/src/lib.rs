mod game;
mod score;
mod util;

pub use game::*;
pub use score::*;
