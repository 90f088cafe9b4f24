pub mod kpis;
pub mod registry;
pub mod sites;
