//! Progress reporting while models load

pub mod reporter;
