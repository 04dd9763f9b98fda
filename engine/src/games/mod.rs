mod broadcaster;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::{Broadcaster, StateSender, StateSubscription, SubscriberId};
pub use session_rng::SessionRng;
