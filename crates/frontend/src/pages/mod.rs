pub mod about;
pub mod category;
pub mod contact;
pub mod distributor;
pub mod home;
pub mod more_products;
pub mod product_detail;
