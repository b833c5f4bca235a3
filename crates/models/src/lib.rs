pub mod errors;
pub mod snowpark;
pub mod conditions;
