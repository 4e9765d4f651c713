pub mod detect;
pub mod new;
pub mod open;
pub mod reseal;
pub mod save;
pub mod share;

pub use detect::handle_detect;
pub use new::handle_new;
pub use open::handle_open;
pub use reseal::handle_reseal;
pub use save::handle_save;
pub use share::handle_share;
