//! Business logic services for the broker.

pub mod dispatcher;
