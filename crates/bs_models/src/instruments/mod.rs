//! Instrument descriptors.
//!
//! - [`OptionType`]: call/put tag for European vanilla options

pub mod option_type;

pub use option_type::OptionType;
