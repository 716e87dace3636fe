mod polygon_offset;

pub use polygon_offset::PolygonOffset;
