pub mod bytes;
pub mod debugger;
pub mod game_boy;
