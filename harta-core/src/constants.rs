/// Page-wide numeric constants.
/// Distances are CSS pixels measured from the visual centre of the page.
pub const TOPIC_RADIUS_PX: f64 = 320.0;
/// Home map radius below the width breakpoint.
pub const HOME_RADIUS_NARROW_PX: f64 = 340.0;
/// Home map radius at or above the width breakpoint.
pub const HOME_RADIUS_WIDE_PX: f64 = 420.0;
/// Viewport width (px) at which the home map switches radius.
pub const HOME_BREAKPOINT_PX: f64 = 1200.0;
/// Opacity of heading nodes that are not the active selection.
pub const FADED_OPACITY: f64 = 0.3;
/// Stars behind a topic page or the authors page.
pub const TOPIC_STAR_COUNT: usize = 100;
/// Stars behind the home map.
pub const HOME_STAR_COUNT: usize = 120;
/// Star diameter range (px): `MIN + random * SPAN`.
pub const STAR_SIZE_MIN_PX: f64 = 1.0;
pub const STAR_SIZE_SPAN_PX: f64 = 2.0;
/// Upper bound of the twinkle animation delay (s).
pub const STAR_DELAY_MAX_S: f64 = 5.0;
/// Site title, also the fallback for undecodable route parameters.
pub const DEFAULT_TITLE: &str = "Harta Informaticii";
/// Label of the panel close control.
pub const CLOSE_LABEL: &str = "Închide";
