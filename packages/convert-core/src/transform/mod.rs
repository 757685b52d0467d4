pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod params;
pub mod resize;

pub use decode::decode_image;
pub use dimensions::calculate_target_dimensions;
pub use encode::encode_image;
pub use params::OutputFormat;
pub use resize::resize_image;
