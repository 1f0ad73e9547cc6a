//! Page components for the greeting card.

mod card;

pub use card::CardPage;
