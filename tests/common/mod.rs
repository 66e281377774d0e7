pub mod synthetic_rects;
