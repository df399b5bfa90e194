diesel::table! {
    reservation_reports (id) {
        id -> Uuid,
        reservation_id -> Uuid,
        check_in_date -> Date,
        check_out_date -> Date,
        guests -> Int4,
        reservation_length -> Int8,
        total_price -> Numeric,
        guest_user -> Varchar,
        apartment -> Varchar,
        created_on -> Timestamptz,
        updated_on -> Timestamptz,
    }
}
