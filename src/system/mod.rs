pub mod collector;
pub mod counters;
pub mod derive;
pub mod enumerate;
pub mod kill;
pub mod platform;
pub mod procfs;
pub mod sampler;
pub mod snapshot;
pub mod stat;
pub mod users;
