//! Dashboard pages

mod dashboard;
mod diagnostic;
mod hunt_detail;
mod login;

pub use dashboard::DashboardPage;
pub use diagnostic::{DiagnosticPage, NotFound};
pub use hunt_detail::HuntDetailPage;
pub use login::LoginPage;
