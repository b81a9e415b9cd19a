pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::{PixelGrid, MAX_DIMENSION};
pub use self::traits::{ImageView, ImageViewMut, Rows};
