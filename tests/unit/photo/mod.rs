pub mod tiler;
