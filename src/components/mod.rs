//! Reusable UI building blocks shared by the pages.

pub mod loading_screen;
pub mod provider_login_button;
