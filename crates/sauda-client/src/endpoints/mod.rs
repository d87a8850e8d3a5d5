//! Endpoint groups, one per backend resource.

pub mod categories;
pub mod expenses;
pub mod products;
pub mod reports;
pub mod returns;
pub mod sales;
pub mod sets;
pub mod transfers;

pub use categories::{CategoriesApi, CategoryCreate, ExpenseCategoriesApi};
pub use expenses::{ExpenseCreate, ExpensesApi};
pub use products::{ProductCreate, ProductUpdate, ProductsApi, RestockRequest};
pub use reports::ReportsApi;
pub use returns::ReturnsApi;
pub use sales::SalesApi;
pub use sets::{SetCreate, SetsApi};
pub use transfers::TransfersApi;
