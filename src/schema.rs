table! {
    loans (id) {
        id -> Int8,
        user_id -> Int8,
        loan_amount -> Numeric,
        interest_rate -> Numeric,
        term_months -> Int4,
        status -> Varchar,
        created_at -> Timestamptz,
        approved_at -> Timestamptz,
    }
}

table! {
    repayments (id) {
        id -> Int8,
        loan_id -> Int8,
        due_amount -> Numeric,
        due_date -> Timestamptz,
        remaining_months -> Int4,
    }
}

table! {
    users (id) {
        id -> Int8,
        email -> Varchar,
        first_name -> Varchar,
        family_name -> Varchar,
        phone_number -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

joinable!(loans -> users (user_id));
joinable!(repayments -> loans (loan_id));

allow_tables_to_appear_in_same_query!(
    loans,
    repayments,
    users,
);
