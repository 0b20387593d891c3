pub mod controller;
pub mod loop_worker;
pub mod state;
pub mod view;

pub use controller::{DashboardController, RefreshSchedule};
pub use state::DashboardState;
pub use view::DashboardView;
