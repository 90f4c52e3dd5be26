pub mod sampler;

pub use sampler::{GridSampler, Lattice, LatticeCell};
