pub mod a001_customer;
pub mod a002_ticket;
pub mod a003_lead;
pub mod a004_task;
pub mod a005_product;
pub mod a006_quote;
pub mod a007_invoice;
pub mod a008_purchase_order;
pub mod common;
