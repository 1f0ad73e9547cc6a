//! Visual theme for the greeting card.

mod styles;

pub use styles::GLOBAL_STYLES;
