//! Layout and interaction logic for the "Harta Informaticii" pages:
//! radial placement, single selection, panel side and the data they act on.

pub mod constants;
pub mod layout;
pub mod page;
pub mod panel;
pub mod routes;
pub mod scene;
pub mod selection;
pub mod stars;
pub mod style;
pub mod topic;

pub use layout::{Connector, LayoutPoint, RadiusPolicy, angle_of, radial_layout};
pub use page::{PanelView, RadialPage};
pub use panel::{Side, panel_side, resolve_side};
pub use routes::{Route, decode_param, route_for, title_from_param};
pub use scene::{SceneKind, Spin};
pub use selection::{Click, Selection};
pub use stars::{Star, generate_stars};
pub use style::{NodeStyle, node_style, node_styles};
pub use topic::{STANDARD_HEADINGS, Topic};
