pub mod episodes;
pub mod provider;
