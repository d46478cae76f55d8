use std::env;

use diesel::prelude::*;
use log::*;

use loan_api::db;
use loan_api::schema::{loans, repayments, users};

fn main() {
	env::set_var("RUST_LOG", "debug");
	pretty_env_logger::init();

	let pool = db::pg_connection();
	let conn = pool.get().expect("get a db connection");

	let user_count: i64 = users::table.count().get_result(&conn).expect("count users");
	let loan_count: i64 = loans::table.count().get_result(&conn).expect("count loans");
	let repayment_count: i64 = repayments::table.count().get_result(&conn).expect("count repayments");

	info!(
		target: "loan::db",
		"{} users, {} loans, {} repayments",
		user_count,
		loan_count,
		repayment_count,
	);
}
