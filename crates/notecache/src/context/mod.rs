//! Request-scoped context extraction.
//!
//! Handlers receive a [`RequestCtx`] carrying the core `RequestContext` built
//! from the `x-request-id` header and the configured request deadline.

mod extractor;

pub use extractor::RequestCtx;
