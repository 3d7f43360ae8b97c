pub mod complex {
    pub mod complex;
    pub mod functions;
    pub mod ops;
}
pub mod utils {
    pub mod float_bits;
}

pub use complex::complex::Complex;
