pub mod config;
pub mod constants;
pub mod error;
pub mod fit;
pub mod frame;
pub mod outline;
pub mod signals;
pub mod state;
pub mod transform;
pub mod ttf;

pub use config::*;
pub use error::*;
pub use fit::*;
pub use frame::*;
pub use outline::*;
pub use signals::*;
pub use state::*;
pub use transform::*;
pub use ttf::TtfFont;
