pub mod ctf_view;
pub mod events_view;
pub mod home_view;
pub mod membership_view;
pub mod resources_view;
pub mod status_bar;
pub mod team_view;

use ratatui::layout::Rect;

pub use ctf_view::CtfView;
pub use events_view::EventsView;
pub use home_view::HomeView;
pub use membership_view::{ComingSoonView, MembershipView};
pub use resources_view::ResourcesView;
pub use status_bar::{NavBar, StatusBar};
pub use team_view::TeamView;

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
