use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db;
use crate::loan::Loan;
use crate::schema::repayments;
use crate::types::{Id, Time};

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[belongs_to(Loan)]
pub struct Repayment {
	pub id: Id,
	pub loan_id: Id,
	pub due_amount: BigDecimal,
	pub due_date: Time,
	pub remaining_months: i32,
}

#[derive(Insertable)]
#[table_name = "repayments"]
pub struct NewRepayment {
	pub loan_id: Id,
	pub due_amount: BigDecimal,
	pub remaining_months: i32,
}

pub struct Repo {
	db: db::PgPool,
}

impl Repo {
	pub fn new(db: db::PgPool) -> Self {
		Repo { db }
	}

	pub fn create(&self, new_repayment: NewRepayment) -> db::Result<Repayment> {
		let conn = &self.db.get()?;
		diesel::insert_into(repayments::table)
			.values(&new_repayment)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_by_id(&self, id: &Id) -> db::Result<Repayment> {
		let conn = &self.db.get()?;
		repayments::table
			.find(id)
			.select(repayments::all_columns)
			.first(conn)
			.map_err(Into::into)
	}

	pub fn find_by_loan(&self, loan_id: &Id) -> db::Result<Vec<Repayment>> {
		let conn = &self.db.get()?;
		repayments::table
			.filter(repayments::loan_id.eq(loan_id))
			.order((repayments::due_date.asc(), repayments::id.asc()))
			.load(conn)
			.map_err(Into::into)
	}

	pub fn set_remaining_months(&self, id: &Id, remaining_months: i32) -> db::Result<Repayment> {
		let conn = &self.db.get()?;
		diesel::update(repayments::table)
			.filter(repayments::id.eq(id))
			.set(repayments::remaining_months.eq(remaining_months))
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn delete(&self, id: &Id) -> db::Result<usize> {
		let conn = &self.db.get()?;
		diesel::delete(repayments::table.filter(repayments::id.eq(id)))
			.execute(conn)
			.map_err(Into::into)
	}
}
