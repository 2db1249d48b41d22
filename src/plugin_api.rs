//! Plugin API for dynamic loading of disabled-year predicates.

use libc::{c_char, c_int};
use std::ffi::CStr;
use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::types::DatePredicate;

/// Library name of the bundled blackout plugin.
pub const PLUGIN_NAME: &str = "blackout_years";

type IsDisabledFn = unsafe extern "C" fn(c_int, c_int, c_int) -> c_int;
type GetStrFn = unsafe extern "C" fn() -> *const c_char;

/// Handle to a loaded plugin.
pub struct PluginHandle {
    // Keeps the library mapped for as long as the function pointers live.
    _lib: libloading::Library,
    is_disabled_fn: IsDisabledFn,
    get_name_fn: GetStrFn,
    get_version_fn: GetStrFn,
}

impl PluginHandle {
    /// Load plugin from path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, libloading::Error> {
        let lib = unsafe { libloading::Library::new(path.as_ref())? };

        unsafe {
            let is_disabled_fn: IsDisabledFn = *lib.get::<IsDisabledFn>(b"plugin_is_disabled")?;
            let get_name_fn: GetStrFn = *lib.get::<GetStrFn>(b"plugin_get_name")?;
            let get_version_fn: GetStrFn = *lib.get::<GetStrFn>(b"plugin_get_version")?;

            Ok(PluginHandle {
                _lib: lib,
                is_disabled_fn,
                get_name_fn,
                get_version_fn,
            })
        }
    }

    /// Ask the plugin whether `date` is disabled.
    ///
    /// Plugin errors (negative codes) count as not disabled.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        let code = unsafe {
            (self.is_disabled_fn)(
                date.year() as c_int,
                date.month() as c_int,
                date.day() as c_int,
            )
        };
        if code < 0 {
            warn!(%date, code, "plugin failed to evaluate date");
        }
        code > 0
    }

    pub fn name(&self) -> String {
        unsafe { read_static_str(self.get_name_fn) }
    }

    pub fn version(&self) -> String {
        unsafe { read_static_str(self.get_version_fn) }
    }

    /// Wrap the plugin as a custom predicate for [`crate::types::DisabledDates`].
    pub fn into_predicate(self) -> DatePredicate {
        let plugin = Arc::new(self);
        Arc::new(move |date| plugin.is_disabled(date))
    }
}

/// Read a plugin-owned string (must not be freed).
unsafe fn read_static_str(f: GetStrFn) -> String {
    unsafe {
        let ptr = f();
        if ptr.is_null() {
            return String::new();
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Try to load the blackout plugin from standard locations.
pub fn try_load_plugin() -> Option<PluginHandle> {
    let search_paths = [
        // Build directory (development)
        "./target/debug/libblackout_years.so",
        "./target/release/libblackout_years.so",
        // User local directory
        "~/.local/lib/yearpick/plugins/libblackout_years.so",
        // System directory
        "/usr/lib/yearpick/plugins/libblackout_years.so",
        "/usr/local/lib/yearpick/plugins/libblackout_years.so",
        // Relative to executable
        "./plugins/libblackout_years.so",
        "./libblackout_years.so",
    ];

    search_paths.iter().find_map(|path| load_plugin_from(path))
}

/// Load the plugin from a single path (`~` is expanded).
pub fn load_plugin_from(path: &str) -> Option<PluginHandle> {
    let expanded = shellexpand::tilde(path);
    match PluginHandle::load(expanded.as_ref()) {
        Ok(handle) => {
            info!(path = %expanded, name = %handle.name(), version = %handle.version(), "loaded plugin");
            Some(handle)
        }
        Err(e) => {
            debug!(path = %expanded, error = %e, "plugin not loaded");
            None
        }
    }
}
