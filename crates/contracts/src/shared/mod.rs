pub mod branding;
pub mod mock_data;
pub mod navigation;
pub mod time_tracking;
