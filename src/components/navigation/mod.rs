pub mod gated_navigation;
pub mod side_navigation;

pub use gated_navigation::{in_app_routing, Navigation};
pub use side_navigation::SideNavigation;
