pub mod admin_viewmodel;
pub mod debts_viewmodel;
pub mod map_viewmodel;
pub mod session_viewmodel;

pub use admin_viewmodel::AdminViewModel;
pub use debts_viewmodel::DebtsViewModel;
pub use map_viewmodel::MapViewModel;
pub use session_viewmodel::SessionViewModel;
