//! Core domain: UI screens outside of gameplay.

pub(crate) mod end_menu;
