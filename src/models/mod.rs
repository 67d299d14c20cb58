pub mod admin;
pub mod auth;
pub mod debt;
pub mod session;
pub mod station;

pub use admin::{AdminOpResponse, HealthcheckResponse};
pub use auth::{LoginResponse, OperatorIdResponse};
pub use debt::{DebtEntry, DebtRow, OwedByResponse, SettleOutcome};
pub use session::SessionRecord;
pub use station::{PassSummaryResponse, StationView, TollStationEntry};
