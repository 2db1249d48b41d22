//! Year picker core: decade paging with disabled-date rules.
//!
//! Features:
//! - Fixed decades (1990-1999) and rolling decades anchored on a page date
//! - Range bounds and custom predicates for disabling years
//! - Event-based picker state (selection and decade navigation)
//! - Plugin system for external disabled-year predicates

pub mod args;
pub mod decade;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod picker;
pub mod types;

#[cfg(feature = "plugins")]
pub mod plugin_api;
