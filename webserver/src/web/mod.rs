//! HTTP surface: handlers and the HTML components they render

pub mod components;
pub mod handlers;
