// Components module - reusable UI building blocks
//
// Shell components are rendered around every screen:
// - Title bar: app name, current screen, request spinner, API URL
// - Status bar: key hints and the latest warning from the log buffer
// - Toast: transient notifications

pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
