//! Leaf and box components.

mod flex_box;
mod text;
mod video;

mod flex_box_shadow;
mod text_shadow;
mod video_shadow;

pub use flex_box::{FlexBox, FlexBoxBuilder};
pub use flex_box_shadow::{flex_box, FlexBoxShadow};
pub use text::{Text, TextBuilder};
pub use text_shadow::{text, TextShadow};
pub use video::{Video, VideoBuilder};
pub use video_shadow::{video, VideoShadow};
