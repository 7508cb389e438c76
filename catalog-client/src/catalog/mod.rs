//! Client-side catalog: loaded products, category filter and pagination

pub mod filter;
pub mod notice;
pub mod pagination;
pub mod state;

pub use notice::{Notice, NoticeLevel};
pub use pagination::{DEFAULT_PAGE_SIZE, PageButton, PageControls, Pagination};
pub use state::{CatalogState, FEATURED_COUNT, sold_out_notice};
