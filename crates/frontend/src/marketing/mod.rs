pub mod future_tech;
