// Library root
// ------------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses the command line and hands it to `ui`.
//
// Module responsibilities:
// - `api`: authenticated REST client for the device ("client") endpoints;
//   owns the session (bearer token and session cookie).
// - `transport`: the `Transport` trait and its reqwest implementation.
// - `models`, `endpoint`: JSON payloads and endpoint paths.
// - `cli`, `config`: command line parsing and the configuration built from it.
// - `ui`: terminal flows for each command, delegating requests to `api`.
// - `error`, `util`: error types and small text helpers.
pub mod api;
pub mod cli;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod transport;
pub mod ui;
pub mod util;

pub use api::{ApiClient, Session};
pub use error::{ApiError, TransportError};
