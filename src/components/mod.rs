//! Reusable UI components shared by the pages.

pub mod nav_bar;
pub mod status_message;
