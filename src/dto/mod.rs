//! DTOs for request and response bodies with a fixed shape.

pub mod api;
