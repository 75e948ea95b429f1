pub mod clock;
pub mod price_provider;
