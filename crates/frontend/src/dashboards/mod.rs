pub mod d400_shift_dashboard;
