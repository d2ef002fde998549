pub mod cost_calculator;
pub mod postgrest;
pub mod preference_service;
