#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Species catalog dialogs: editing, detail view and summary cards.

pub mod detail_dialog;
pub mod edit_dialog;
pub mod error;
pub mod notifier;
pub mod screen;
pub mod settings;
pub mod startup;
pub mod summary_card;
pub mod view;
