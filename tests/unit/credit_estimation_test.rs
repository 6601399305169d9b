// Property tests for credit derivation
// creditsToAdd = explicit credits when given, otherwise floor(amount / 5000).

use chapa_checkout::payments::{Amount, IncomingPaymentRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn request(body: serde_json::Value) -> IncomingPaymentRequest {
    serde_json::from_value(body).unwrap()
}

proptest! {
    #[test]
    fn integer_amounts_estimate_by_floor_division(amount in 1i64..10_000_000_000) {
        let req = request(json!({ "amount": amount }));
        let parsed = req.amount().unwrap();
        prop_assert_eq!(req.credits_to_add(&parsed), amount.div_euclid(5000));
    }

    #[test]
    fn numeric_strings_estimate_like_numbers(amount in 1i64..10_000_000_000) {
        let as_number = request(json!({ "amount": amount }));
        let as_text = request(json!({ "amount": amount.to_string() }));
        prop_assert_eq!(
            as_number.credits_to_add(&as_number.amount().unwrap()),
            as_text.credits_to_add(&as_text.amount().unwrap())
        );
    }

    #[test]
    fn explicit_credits_always_win(amount in 1i64..10_000_000_000, credits in 1i64..100_000) {
        let req = request(json!({ "amount": amount, "credits": credits }));
        let parsed = req.amount().unwrap();
        prop_assert_eq!(req.credits_to_add(&parsed), credits);
    }

    #[test]
    fn amounts_are_forwarded_unchanged(amount in 1u32..u32::MAX) {
        let req = request(json!({ "amount": amount }));
        prop_assert_eq!(req.amount().unwrap().to_gateway_string(), amount.to_string());
    }
}

#[test]
fn test_boundaries_around_unit_price() {
    for (amount, credits) in [
        (dec!(4999.99), 0),
        (dec!(5000), 1),
        (dec!(9999.99), 1),
        (dec!(10000), 2),
        (dec!(10000.01), 2),
    ] {
        let amount = Amount::Text(amount.to_string());
        assert_eq!(amount.estimated_credits(), credits, "amount {:?}", amount);
    }
}

#[test]
fn test_decimal_amount_is_exact() {
    let amount = Amount::Text("15000.50".to_string());
    assert_eq!(amount.to_decimal(), Some(Decimal::new(1500050, 2)));
    assert_eq!(amount.estimated_credits(), 3);
}
