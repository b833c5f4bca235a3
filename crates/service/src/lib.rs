//! Service layer: the snowpark store and its CRUD contract, plus stateless condition simulators.
//! - Validation and record types live in the `models` crate.
//! - Operations return typed `ServiceError`s; translation to transport responses happens in `server`.

pub mod errors;
pub mod snowpark;
pub mod simulation;
