//! # Consolidated-View Projector
//!
//! Reduces a [`DecodedPayload`] to the one merchant account a payment flow
//! acts on. The primary account is the first of tags 26-35 present, falling
//! back to the first account (in encounter order) anywhere in 02-51.
//! Reference slots the primary account leaves empty are filled, in slot
//! order, from the additional data values in encounter order.

use types::{ConsolidatedView, DecodedPayload, MerchantAccount};

use crate::constants::{tag_number, tags};

/// Project `payload` onto its primary merchant account
pub fn project(payload: &DecodedPayload) -> ConsolidatedView {
    let mut view = ConsolidatedView {
        poi_method_type: payload.poi_method_type,
        transaction_amount: payload.transaction_amount.clone(),
        country_code: payload.country_code.clone(),
        ..ConsolidatedView::default()
    };

    let Some(account) = primary_account(payload) else {
        return view;
    };

    view.aid = account.aid.clone();
    view.aid_type = account.aid_type;
    view.payment_scheme = account.payment_scheme;
    view.merchant_id = account.merchant_id.clone();
    view.reference_1 = account.reference_1.clone();
    view.reference_2 = account.reference_2.clone();
    view.reference_3 = account.reference_3.clone();

    let empty_slots = view
        .references_mut()
        .into_iter()
        .filter(|slot| slot.is_empty());
    for (slot, value) in empty_slots.zip(payload.additional_data.values()) {
        *slot = value.clone();
    }

    view
}

/// Merchant account a consolidated view is built from, if any
pub fn primary_account(payload: &DecodedPayload) -> Option<&MerchantAccount> {
    tags::PREFERRED_PRIMARY_ACCOUNTS
        .iter()
        .find_map(|tag| payload.merchant_account_info.get(*tag))
        .or_else(|| {
            payload
                .merchant_account_info
                .iter()
                .find(|(tag, _)| {
                    tag_number(tag).is_some_and(|n| tags::MERCHANT_ACCOUNT_RANGE.contains(&n))
                })
                .map(|(_, account)| account)
        })
}
