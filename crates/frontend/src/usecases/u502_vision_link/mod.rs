mod camera;
mod view;

pub use view::VisionLinkView;
