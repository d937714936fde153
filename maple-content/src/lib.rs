mod client;

pub use client::{ContentService, Meme};
