//! Services coordinating gift card issuance and redemption.

use uuid::Uuid;
use validator::Validate;

use crate::domain::gift_card::{GiftCard, GiftCardStatus, NewGiftCard};
use crate::domain::types::{GiftCardId, HubId};
use crate::dto::gift_cards::{GiftCardsPageData, GiftCardsQuery};
use crate::filters::FilterCriteria;
use crate::forms::gift_cards::{IssueGiftCardForm, RedeemGiftCardForm, VoidGiftCardForm};
use crate::forms::to_cents;
use crate::listview::ListState;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{GiftCardReader, GiftCardWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn generate_code() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("GC-{}", id[..12].to_uppercase())
}

/// Loads the filtered, paginated gift cards dashboard.
pub fn load_gift_cards_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: GiftCardsQuery,
) -> ServiceResult<GiftCardsPageData>
where
    R: GiftCardReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let records = repo.list_gift_cards(HubId::new(user.hub_id)?)?;

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .status(query.status.unwrap_or_default())
        .amount_between(
            query.min_balance.map(to_cents),
            query.max_balance.map(to_cents),
        );

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let gift_cards = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(GiftCardsPageData {
        gift_cards,
        criteria: state.criteria().clone(),
    })
}

/// Issues a new gift card and returns it so the code can be shown once.
pub fn issue_gift_card<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: IssueGiftCardForm,
) -> ServiceResult<GiftCard>
where
    R: GiftCardWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid gift card details".to_string()));
    }

    let new_card = NewGiftCard::new(
        user.hub_id,
        generate_code(),
        form.recipient_email,
        to_cents(form.amount),
    );

    let card = repo.create_gift_card(&new_card).map_err(|err| {
        log::error!("Failed to issue gift card: {err}");
        err
    })?;

    Ok(card)
}

/// Debits a gift card balance; the domain decides whether the debit is legal.
pub fn redeem_gift_card<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RedeemGiftCardForm,
) -> ServiceResult<GiftCard>
where
    R: GiftCardReader + GiftCardWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid redemption details".to_string()));
    }

    let hub_id = HubId::new(user.hub_id)?;
    let code = form.code.trim().to_uppercase();

    let card = repo
        .get_gift_card_by_code(&code, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let debited = card
        .debit(to_cents(form.amount))
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let saved = repo
        .set_gift_card_state(
            GiftCardId::new(debited.id)?,
            debited.balance_cents,
            &debited.status,
        )
        .map_err(|err| {
            log::error!("Failed to redeem gift card: {err}");
            err
        })?;

    Ok(saved)
}

/// Voids a card; the remaining balance becomes unusable.
pub fn void_gift_card<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: VoidGiftCardForm,
) -> ServiceResult<()>
where
    R: GiftCardReader + GiftCardWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let hub_id = HubId::new(user.hub_id)?;
    let card_id = GiftCardId::new(form.id)?;

    let card = repo
        .get_gift_card_by_id(card_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.set_gift_card_state(card_id, card.balance_cents, &GiftCardStatus::Void)
        .map_err(|err| {
            log::error!("Failed to void gift card: {err}");
            err
        })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

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

    fn card(balance_cents: i64) -> GiftCard {
        GiftCard {
            id: 9,
            hub_id: 42,
            code: "GC-TEST".to_string(),
            recipient_email: None,
            initial_cents: 5_000,
            balance_cents,
            status: GiftCardStatus::Active,
            issued_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn redeeming_debits_and_persists_the_new_state() {
        let mut repo = MockRepository::new();
        repo.expect_get_gift_card_by_code()
            .withf(|code, _| code == "GC-TEST")
            .times(1)
            .returning(|_, _| Ok(Some(card(5_000))));
        repo.expect_set_gift_card_state()
            .withf(|id, balance, status| {
                id.get() == 9 && *balance == 3_750 && *status == GiftCardStatus::Active
            })
            .times(1)
            .returning(|_, balance, status| {
                let mut card = card(balance);
                card.status = status.clone();
                Ok(card)
            });

        let saved = redeem_gift_card(
            &repo,
            &admin_user(),
            RedeemGiftCardForm {
                code: "gc-test".to_string(),
                amount: 12.5,
            },
        )
        .expect("should redeem");

        assert_eq!(saved.balance_cents, 3_750);
    }

    #[test]
    fn overdrafts_fail_soft_without_persisting() {
        let mut repo = MockRepository::new();
        repo.expect_get_gift_card_by_code()
            .times(1)
            .returning(|_, _| Ok(Some(card(1_000))));
        repo.expect_set_gift_card_state().times(0);

        let result = redeem_gift_card(
            &repo,
            &admin_user(),
            RedeemGiftCardForm {
                code: "GC-TEST".to_string(),
                amount: 50.0,
            },
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
