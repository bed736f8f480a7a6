//! Locale data for rendering names.

mod builtin;

pub use builtin::Locale;
