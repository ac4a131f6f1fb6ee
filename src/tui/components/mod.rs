pub mod breadcrumb;
pub mod header;
pub mod scrollable;
pub mod status_bar;

pub use breadcrumb::render_breadcrumb;
pub use header::render_header;
pub use scrollable::Scrollable;
pub use status_bar::render_status_bar;
