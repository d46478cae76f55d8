#[macro_use]
extern crate diesel;

pub mod db;
pub mod error;
pub mod loan;
pub mod repayment;
pub mod schema;
pub mod types;
pub mod user;

pub use crate::db::PgPool;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::loan::{Loan, LoanStatus, NewLoan};
pub use crate::repayment::{NewRepayment, Repayment};
pub use crate::types::{Id, Time};
pub use crate::user::{NewUser, User, UserKey};
