pub mod armor;
pub mod cipher;
pub mod compress;

pub use armor::*;
pub use cipher::*;
pub use compress::*;
