//! Rendering of the fetched list.
//!
//! # Submodules
//!
//! - [`listing`]: numbered plain-text list for the terminal
//! - [`markdown`]: Markdown document with linked headlines
//! - [`json`]: dated JSON files for later consumption
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── business.json
//!     └── interest-rates.json
//! ```

pub mod json;
pub mod listing;
pub mod markdown;
