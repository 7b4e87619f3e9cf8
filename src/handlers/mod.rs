pub mod health;
pub mod list;
pub mod update_form;
pub mod create;

pub use health::health_handler;
pub use list::list_handler;
pub use update_form::update_form_handler;
pub use create::create_handler;
