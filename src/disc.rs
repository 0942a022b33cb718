pub mod boundary;
pub mod euler1d;
pub mod mesh;
