use std::borrow::Borrow;

use crate::repos::common::*;

#[test]
fn insert_user() {
	let _guard = db_guard();
	let f = Fixture::new();
	let suite = Suite::setup();
	let user = suite.user_repo.create_user(NewUser {
		email: "tom@example.com",
		first_name: "Tom",
		family_name: "Riddle",
		phone_number: Some("555-5555"),
	}).unwrap();

	let got_user = users::table.find(user.id).first::<User>(&f.conn()).unwrap();
	assert_eq!(got_user, user)
}

#[test]
fn find_user_with_key() {
	let _guard = db_guard();
	let f = Fixture::new();
	let suite = Suite::setup();
	let user = f.user_factory.bob();

	let email = user.email.borrow();
	let id = user.id;

	// test cases using various UserKeys
	let test_cases = vec![
		UserKey::Email(email),
		UserKey::ID(id),
	];

	for user_key in test_cases {
		let got = suite.user_repo.find_user(user_key)
			.expect("found user");

		assert_eq!(user, got)
	}
}

#[test]
fn duplicate_email_is_rejected() {
	let _guard = db_guard();
	let f = Fixture::new();
	let suite = Suite::setup();
	let bob = f.user_factory.bob();

	let err = suite.user_repo.create_user(NewUser {
		email: &bob.email,
		..UserFactory::defaults()
	}).unwrap_err();

	assert_eq!(err, db::Error::RecordAlreadyExists)
}

#[test]
fn deleting_user_cascades_to_loans_and_repayments() {
	let _guard = db_guard();
	let f = Fixture::new();
	let suite = Suite::setup();
	let bob = f.user_factory.bob();
	let lucy = f.user_factory.lucy();

	let bob_loan = f.loan_factory.loan_for(bob.id);
	let lucy_loan = f.loan_factory.loan_for(lucy.id);

	suite.repayment_repo.create(NewRepayment {
		loan_id: bob_loan.id,
		due_amount: BigDecimal::from(110),
		remaining_months: 11,
	}).unwrap();
	suite.repayment_repo.create(NewRepayment {
		loan_id: lucy_loan.id,
		due_amount: BigDecimal::from(220),
		remaining_months: 5,
	}).unwrap();

	let deleted = suite.user_repo.delete_user(&bob.id).unwrap();
	assert_eq!(deleted, 1);

	assert_eq!(
		suite.loan_repo.find_by_id(&bob_loan.id).unwrap_err(),
		db::Error::RecordNotFound,
	);
	assert!(suite.repayment_repo.find_by_loan(&bob_loan.id).unwrap().is_empty());

	// the other user's records stay put
	assert_eq!(suite.loan_repo.find_by_id(&lucy_loan.id).unwrap(), lucy_loan);
	assert_eq!(suite.repayment_repo.find_by_loan(&lucy_loan.id).unwrap().len(), 1);
}
