pub mod comparison;
pub mod currency;
pub mod form;
pub mod notification;
pub mod preference;
pub mod vehicle;

pub use comparison::{CompareResponse, RouteCard, RouteComparison};
pub use currency::{CurrencyCode, CurrencyOption};
pub use form::{PreferenceForm, RouteInputs};
pub use notification::{Notification, NotificationLevel};
pub use preference::RoutePreference;
pub use vehicle::VehicleType;
