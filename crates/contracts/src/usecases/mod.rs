pub mod common;
pub mod u501_scan_barcode;
pub mod u502_vision_link;
