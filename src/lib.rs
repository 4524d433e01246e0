//! Terminal front end for the WiCyS UAlberta student chapter: landing page,
//! team and CTF pages, a resource directory, and an events list split into
//! upcoming and past.

pub mod app;
pub mod cli;
pub mod club;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod listing;
pub mod logging;
pub mod theme;
pub mod tui;
pub mod ui;
