pub mod affordability;
pub mod hospitals;
pub mod prevalence;
pub mod treatment;
pub mod trends;
