pub mod mesh1d;

pub use mesh1d::Mesh1d;
