mod credentials;
mod profile;
mod profile_registry;
mod region;
mod session;
mod shared_config;

pub use credentials::*;
pub use profile::*;
pub use profile_registry::*;
pub use region::*;
pub use session::*;
