//! Infrastructure layer - wire format of the REST API

pub mod wire;
