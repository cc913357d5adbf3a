//! pickcountry-cli
//! ===============
//!
//! HTTP front end for [`pickcountry_core`]. The binary (`pick-country`)
//! loads the two country tables, builds the directory and serves one
//! shared picker session to a thin browser client.
//!
//! Basic usage:
//!
//! ```text
//! pick-country --help
//! pick-country --port 8081 --max-list-size 20
//! pick-country --codes data/country_codes.json --alpha data/alpha_countries.json
//! ```
//!
//! The transport pieces live in this library target so they can be tested
//! without opening sockets.

pub mod args;
pub mod data;
pub mod logging;
pub mod server;
