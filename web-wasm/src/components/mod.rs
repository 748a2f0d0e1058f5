pub mod map_view;
pub mod popup;
pub mod status_banner;
