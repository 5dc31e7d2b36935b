//! GUI module - User interface components

mod app;
mod page_view;
mod sidebar;

pub use app::DashboardApp;
pub use page_view::{ExportRequest, PageAction, PageView};
pub use sidebar::{Page, Sidebar, SidebarAction};
