//! HTTP API: router, request/response mapping, error responses.

pub mod app;
