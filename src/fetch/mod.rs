//! Network transport: page download and sitemap probe.
//!
//! The analysis itself never touches the network. This module produces its
//! inputs:
//! - `fetch_page`: the HTML and the measured load time, via direct or proxy endpoints
//! - `check_sitemap`: the sitemap record merged before scoring

mod page;
mod sitemap;

pub use page::{endpoints_from_config, fetch_page, FetchEndpoint, FetchedPage};
pub use sitemap::check_sitemap;
