//! Various unsorted geometrical and logical operators.

pub(crate) use self::inv::inv;
pub use self::sdp_matrix::SdpMatrix3;

mod inv;
mod sdp_matrix;
