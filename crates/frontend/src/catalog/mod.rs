pub mod api;
pub mod dropdown;
pub mod product_card;
pub mod search_bar;
pub mod showcase;
