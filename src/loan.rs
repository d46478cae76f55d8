use std::ops::{Div, Mul};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::{
	deserialize::{self, FromSql},
	prelude::*,
	serialize,
	serialize::{Output, ToSql},
	sql_types::Varchar,
};
use diesel::pg::Pg;
use strum_macros::{Display, EnumString};

use crate::{Error, ErrorKind, Result};
use crate::db;
use crate::schema::loans;
use crate::types::{Id, Time};
use crate::user::User;

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[belongs_to(User)]
pub struct Loan {
	pub id: Id,
	pub user_id: Id,
	pub loan_amount: BigDecimal,
	// percentage, two fractional digits
	pub interest_rate: BigDecimal,
	pub term_months: i32,
	pub status: LoanStatus,
	pub created_at: Time,
	// stamped at insert; status changes do not update it
	pub approved_at: Time,
}

impl Loan {
	// Converts interest rate (in percent) to a fraction
	pub fn interest_fraction(&self) -> BigDecimal {
		(&self.interest_rate).div(BigDecimal::from(100))
	}

	/// Principal plus simple interest over the whole term
	pub fn total_due(&self) -> BigDecimal {
		(&self.loan_amount).mul(BigDecimal::from(1) + self.interest_fraction())
	}

	pub fn monthly_installment(&self) -> Result<BigDecimal> {
		if self.term_months == 0 {
			return Err(Error::new(ErrorKind::ZeroTermLoan));
		}
		Ok(self.total_due().div(BigDecimal::from(self.term_months)))
	}
}

#[derive(Insertable)]
#[table_name = "loans"]
pub struct NewLoan {
	pub user_id: Id,
	pub loan_amount: BigDecimal,
	pub interest_rate: BigDecimal,
	pub term_months: i32,
	pub status: LoanStatus,
}

#[derive(Debug, AsExpression, FromSqlRow, Eq, PartialEq, EnumString, Display)]
#[sql_type = "Varchar"]
#[strum(serialize_all = "snake_case")]
pub enum LoanStatus {
	Pending,
	Approved,
	Rejected,
	Paid,
}

impl Default for LoanStatus {
	fn default() -> Self { LoanStatus::Pending }
}

impl ToSql<Varchar, Pg> for LoanStatus {
	fn to_sql<W: std::io::Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
		ToSql::<Varchar, Pg>::to_sql(&self.to_string(), out)
	}
}

impl FromSql<Varchar, Pg> for LoanStatus {
	fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
		let bytes = bytes.ok_or_else(|| "error deserializing from varchar")?;
		let s = std::str::from_utf8(bytes)?;

		LoanStatus::from_str(s)
			.map_err(|_| format!("unrecognized loan status: {}", s).into())
	}
}

pub struct Repo {
	db: db::PgPool,
}

impl Repo {
	pub fn new(db: db::PgPool) -> Self {
		Repo { db }
	}

	pub fn create(&self, new_loan: NewLoan) -> db::Result<Loan> {
		let conn = &self.db.get()?;
		diesel::insert_into(loans::table)
			.values(&new_loan)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_by_id(&self, id: &Id) -> db::Result<Loan> {
		let conn = &self.db.get()?;
		loans::table
			.find(id)
			.select(loans::all_columns)
			.first(conn)
			.map_err(Into::into)
	}

	pub fn find_by_user(&self, user_id: &Id) -> db::Result<Vec<Loan>> {
		let conn = &self.db.get()?;
		loans::table
			.filter(loans::user_id.eq(user_id))
			.order(loans::id.asc())
			.load(conn)
			.map_err(Into::into)
	}

	// approved_at keeps its insert-time value across status changes
	pub fn set_status(&self, id: &Id, status: LoanStatus) -> db::Result<Loan> {
		let conn = &self.db.get()?;
		diesel::update(loans::table)
			.filter(loans::id.eq(id))
			.set(loans::status.eq(status))
			.get_result(conn)
			.map_err(Into::into)
	}

	/// Deletes the loan row; the store cascades to its repayments
	pub fn delete(&self, id: &Id) -> db::Result<usize> {
		let conn = &self.db.get()?;
		diesel::delete(loans::table.filter(loans::id.eq(id)))
			.execute(conn)
			.map_err(Into::into)
	}
}
