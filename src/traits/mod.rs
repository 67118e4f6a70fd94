pub mod backend;
pub mod host;
pub mod ui;

pub use backend::*;
pub use host::*;
pub use ui::*;
