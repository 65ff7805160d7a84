//! UI Components

pub mod navbar;
pub mod starfield;
pub mod tooltip;

pub use navbar::Navbar;
pub use starfield::Starfield;
pub use tooltip::Tooltip;
