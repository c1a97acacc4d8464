pub mod client;
pub mod error;
pub mod extract;

pub use client::PageClient;
pub use error::FetchError;
pub use extract::{ONLINE_LAYOUT, RANKING_LAYOUT, TableLayout, extract};
