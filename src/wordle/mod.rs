pub mod prelude;
mod error;
mod color;
mod dictionary;
mod state;
mod filter;
mod select;
mod game;
mod play;

pub use self::{
    prelude::*,
    error::*,
    color::*,
    dictionary::*,
    state::*,
    filter::*,
    select::*,
    game::*,
    play::*,
};
