mod cli_error;
mod constants;
mod files;
mod logging;
mod tty;
mod user_input;

pub use cli_error::*;
pub use constants::*;
pub use files::*;
pub use logging::*;
pub use tty::*;
pub use user_input::*;
