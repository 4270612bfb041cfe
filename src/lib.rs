pub mod accounts;
pub mod assets;
pub mod config;
pub mod errors;
pub mod favorites;
pub mod history;
pub mod models;
pub mod playback;
pub mod playlist;
pub mod store;
pub mod web;
