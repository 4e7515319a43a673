pub mod pse_distributor;

pub use pse_distributor::PseDistributorContract;
