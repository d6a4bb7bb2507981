pub mod map_info;
pub mod map_tabs;
pub mod map_view;
