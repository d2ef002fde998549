//! Stable application-wide constants.
//!
//! Values here are reference data, form defaults, and fallbacks for
//! env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Preference store ---

/// Remote table holding the append-only preference records.
pub const PREFERENCES_TABLE: &str = "route_preferences";
/// Currency applied when a form or stored row carries none.
pub const DEFAULT_CURRENCY: &str = "AED";
/// Path prefix PostgREST (and Supabase) serves tables under.
pub const POSTGREST_PATH_PREFIX: &str = "/rest/v1";

// --- Reference data shown by the form ---

/// Currencies offered by the currency selector: (code, display name).
pub const SUPPORTED_CURRENCIES: &[(&str, &str)] = &[
    ("AED", "UAE Dirham"),
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("INR", "Indian Rupee"),
];

/// Fuel price presets: (name, price per litre in AED).
/// Dubai pump prices as of May 2023.
pub const FUEL_PRESETS: &[(&str, &str)] = &[
    ("Special 95", "2.91"),
    ("Super 98", "3.02"),
    ("Diesel", "3.00"),
];

// --- Form defaults (text, exactly as the form shows them) ---

pub const DEFAULT_FUEL_EFFICIENCY: &str = "10";
pub const DEFAULT_FUEL_COST: &str = "1.50";
pub const DEFAULT_TOLL_ROUTE_DISTANCE: &str = "30";
pub const DEFAULT_TOLL_FREE_ROUTE_DISTANCE: &str = "45";
pub const DEFAULT_TOLL_COST: &str = "5.00";

// --- Notification texts ---

pub const MSG_COMPARISON_OK: &str = "Route comparison calculated successfully!";
pub const MSG_SAVE_OK: &str = "Your preferences have been saved";
pub const MSG_SAVE_FAILED: &str = "Failed to save your preferences";
pub const MSG_LOAD_FAILED: &str = "Failed to load your preferences";
pub const MSG_COST_OUT_OF_RANGE: &str =
    "These values produce a cost too large to calculate";
