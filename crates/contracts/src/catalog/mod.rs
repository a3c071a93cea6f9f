//! Product catalog contracts: wire DTOs, the canonical `ProductRecord`,
//! and the pure data-shaping passes (normalization, category index,
//! filtering and subcategory grouping) that every catalog view is built on.

pub mod grouping;
pub mod index;
pub mod product;
pub mod raw;

pub use grouping::{filter_by_category, group_by_subcategory, SubcategoryGroup, NO_SUBCATEGORY};
pub use index::{build_index, CategoryIndexEntry, CategoryItem};
pub use product::{normalize, DownloadLink, ProductRecord};
pub use raw::{RawProduct, SearchHit};
