pub mod page;
pub mod canvas;
pub mod fit;
pub mod fit_sse;
