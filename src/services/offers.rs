//! Services coordinating coupons and vouchers.

use chrono::Utc;
use rand::{RngExt, distr::Alphanumeric};
use validator::Validate;

use crate::domain::offer::{OfferKind, OfferStatus};
use crate::domain::types::{Code, HubId, OfferId};
use crate::dto::offers::{OffersPageData, OffersQuery};
use crate::filters::FilterCriteria;
use crate::forms::offers::{AddOfferForm, DeleteOfferForm, RedeemOfferForm, ToggleOfferForm};
use crate::listview::ListState;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{OfferReader, OfferWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn generate_code(kind: &OfferKind) -> String {
    let prefix = match kind {
        OfferKind::Coupon => "CPN",
        OfferKind::Voucher => "VCH",
        OfferKind::Other(_) => "OFR",
    };
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{prefix}-{}", suffix.to_uppercase())
}

/// Loads the filtered, paginated offers dashboard.
pub fn load_offers_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OffersQuery,
) -> ServiceResult<OffersPageData>
where
    R: OfferReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let records = repo.list_offers(HubId::new(user.hub_id)?)?;

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .category(query.kind.unwrap_or_default())
        .status(query.status.unwrap_or_default());

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let offers = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(OffersPageData {
        offers,
        criteria: state.criteria().clone(),
    })
}

/// Validates the add-offer form and persists the offer; a missing code is
/// generated from the offer kind.
pub fn add_offer<R>(repo: &R, user: &AuthenticatedUser, form: AddOfferForm) -> ServiceResult<()>
where
    R: OfferReader + OfferWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid offer details".to_string()));
    }

    let kind = OfferKind::from(form.kind.as_str());
    let code = match &form.code {
        Some(code) => Code::new(code.clone())?.into_inner(),
        None => generate_code(&kind),
    };

    let hub_id = HubId::new(user.hub_id)?;
    if repo.get_offer_by_code(&code, hub_id)?.is_some() {
        return Err(ServiceError::Form(format!("Code {code} is already taken")));
    }

    let new_offer = form.into_new_offer(user.hub_id, code)?;

    repo.create_offer(&new_offer).map_err(|err| {
        log::error!("Failed to add an offer: {err}");
        err
    })?;

    Ok(())
}

/// Flips an offer between active and disabled.
pub fn toggle_offer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ToggleOfferForm,
) -> ServiceResult<()>
where
    R: OfferReader + OfferWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let hub_id = HubId::new(user.hub_id)?;
    let offer_id = OfferId::new(form.id)?;

    let offer = repo
        .get_offer_by_id(offer_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let next = match offer.status {
        OfferStatus::Active => OfferStatus::Disabled,
        _ => OfferStatus::Active,
    };

    repo.set_offer_status(offer_id, &next).map_err(|err| {
        log::error!("Failed to toggle offer: {err}");
        err
    })?;

    Ok(())
}

/// Records one redemption of a live offer, looked up by its code.
pub fn redeem_offer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RedeemOfferForm,
) -> ServiceResult<()>
where
    R: OfferReader + OfferWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid redemption code".to_string()));
    }

    let hub_id = HubId::new(user.hub_id)?;
    let code = Code::new(form.code)?;

    let offer = repo
        .get_offer_by_code(code.as_str(), hub_id)?
        .ok_or(ServiceError::NotFound)?;

    if !offer.is_live(Utc::now().date_naive()) {
        return Err(ServiceError::Form(format!(
            "Offer {} is not redeemable",
            offer.code
        )));
    }

    repo.record_offer_redemption(OfferId::new(offer.id)?)
        .map_err(|err| {
            log::error!("Failed to record redemption: {err}");
            err
        })?;

    Ok(())
}

/// Removes an offer.
pub fn delete_offer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: DeleteOfferForm,
) -> ServiceResult<()>
where
    R: OfferReader + OfferWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let hub_id = HubId::new(user.hub_id)?;
    let offer_id = OfferId::new(form.id)?;

    repo.get_offer_by_id(offer_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_offer(offer_id).map_err(|err| {
        log::error!("Failed to delete offer: {err}");
        err
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::offer::{Discount, Offer};
    use crate::repository::mock::MockRepository;

    fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            hub_id: 42,
            roles: vec![
                SERVICE_ACCESS_ROLE.to_string(),
                SERVICE_ADMIN_ROLE.to_string(),
            ],
            exp: 0,
        }
    }

    fn expired_offer() -> Offer {
        Offer {
            id: 1,
            hub_id: 42,
            kind: OfferKind::Coupon,
            code: "OLD-CODE".to_string(),
            title: "Expired".to_string(),
            discount: Discount::Percent(10),
            status: OfferStatus::Active,
            valid_from: None,
            valid_to: Some(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            max_redemptions: None,
            redemptions: 0,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn expired_offers_cannot_be_redeemed() {
        let mut repo = MockRepository::new();
        repo.expect_get_offer_by_code()
            .times(1)
            .returning(|_, _| Ok(Some(expired_offer())));
        repo.expect_record_offer_redemption().times(0);

        let result = redeem_offer(
            &repo,
            &admin_user(),
            RedeemOfferForm {
                code: "old-code".to_string(),
            },
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_offer_by_code()
            .withf(|code, _| code == "SAVE-5")
            .times(1)
            .returning(|_, _| Ok(Some(expired_offer())));
        repo.expect_create_offer().times(0);

        let form = AddOfferForm {
            title: "Five off".to_string(),
            kind: "Coupon".to_string(),
            code: Some("save-5".to_string()),
            discount_percent: None,
            discount_amount: Some(5.0),
            valid_from: None,
            valid_to: None,
            max_redemptions: None,
        };

        let result = add_offer(&repo, &admin_user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
