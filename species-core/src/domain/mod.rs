mod form;
mod notification;
mod species;

pub use form::*;
pub use notification::*;
pub use species::*;
