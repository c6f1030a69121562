mod describe;

pub use describe::run_describe;
