pub mod u502_vision_link;
