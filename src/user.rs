use diesel::prelude::*;

use crate::db;
use crate::schema::users;
use crate::types::{Id, Time};

#[derive(Queryable, Identifiable, PartialEq, Debug)]
pub struct User {
	pub id: Id,
	pub email: String,
	pub first_name: String,
	pub family_name: String,
	pub phone_number: Option<String>,
	pub created_at: Time,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser<'a> {
	pub email: &'a str,
	pub first_name: &'a str,
	pub family_name: &'a str,
	pub phone_number: Option<&'a str>,
}

pub enum UserKey<'a> {
	ID(Id),
	Email(&'a str),
}

pub struct Repo {
	db: db::PgPool,
}

impl<'a> Repo {
	pub fn new(db: db::PgPool) -> Self {
		Repo { db }
	}

	pub fn create_user(&self, new_user: NewUser) -> db::Result<User> {
		let conn = &self.db.get()?;
		diesel::insert_into(users::table)
			.values(&new_user)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_user(&self, key: UserKey<'a>) -> db::Result<User> {
		let conn = &self.db.get()?;
		match key {
			UserKey::ID(id) => {
				users::table
					.find(id)
					.first::<User>(conn)
					.map_err(Into::into)
			}
			UserKey::Email(email) => {
				users::table
					.filter(users::email.eq(email))
					.first::<User>(conn)
					.map_err(Into::into)
			}
		}
	}

	/// Deletes the user row; the store cascades to the user's loans and
	/// their repayments
	pub fn delete_user(&self, id: &Id) -> db::Result<usize> {
		let conn = &self.db.get()?;
		diesel::delete(users::table.filter(users::id.eq(id)))
			.execute(conn)
			.map_err(Into::into)
	}
}
