pub mod model;

pub mod brownian_cube;
pub mod gbm;
pub mod ou_process;
