//! Seeds a demo hub with sample marketplace data.
//!
//! Expects an already-migrated database; run `diesel migration run` first.
//!
//! ```sh
//! DATABASE_URL=market.db cargo run --bin seed-demo
//! ```

use chrono::{Duration, Utc};
use localmart::db::establish_connection_pool;
use localmart::domain::campaign::NewCampaign;
use localmart::domain::gift_card::NewGiftCard;
use localmart::domain::listing::NewListing;
use localmart::domain::loyalty::NewLoyaltyProgram;
use localmart::domain::offer::{Discount, NewOffer, OfferKind};
use localmart::domain::order::{NewOrder, OrderStatus};
use localmart::domain::store_profile::NewStoreProfile;
use localmart::domain::types::HubId;
use localmart::repository::{
    CampaignWriter, DieselRepository, GiftCardWriter, ListingWriter, LoyaltyWriter, OfferWriter,
    OrderReader, OrderWriter, StoreProfileWriter,
};

const HUB_ID: i32 = 1;
const OWNER: &str = "demo-merchant@example.com";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "market.db".to_string());
    let pool = establish_connection_pool(&database_url)?;
    let repo = DieselRepository::new(pool);

    seed_listings(&repo)?;
    seed_campaigns(&repo)?;
    seed_offers(&repo)?;
    seed_gift_cards(&repo)?;
    seed_orders(&repo)?;
    seed_programs(&repo)?;

    log::info!("Demo hub {HUB_ID} seeded");
    Ok(())
}

fn seed_listings(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    let rows = [
        ("Corner Bakery", "Fresh bread and pastries every morning.", "food", "1 Main St"),
        ("Modern Apartment Stays", "Short-term rentals in the center.", "lodging", "8 Hill Rd"),
        ("Green Grocer", "Local produce and organic goods.", "food", "14 Market Sq"),
        ("Bright Books", "Independent bookshop with readings.", "retail", "3 School Ln"),
        ("Cycle Works", "Repairs and rentals for every bike.", "services", "21 River St"),
        ("Cozy Cottage Cafe", "Coffee, cakes and a quiet garden.", "food", "5 Garden Way"),
    ];

    let listings: Vec<NewListing> = rows
        .iter()
        .map(|(title, description, category, address)| {
            NewListing::new(
                HUB_ID,
                OWNER.to_string(),
                (*title).to_string(),
                (*description).to_string(),
                (*category).to_string(),
                "Springfield".to_string(),
                (*address).to_string(),
            )
            .contact(None, Some(format!("hello@{}.example", category)))
        })
        .collect();

    let created = repo.create_listings(&listings)?;
    log::info!("{created} listings created");
    Ok(())
}

fn seed_campaigns(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();

    repo.create_campaign(&NewCampaign::new(
        HUB_ID,
        "Spring promo".to_string(),
        50_000,
        today - Duration::days(10),
        Some(today + Duration::days(20)),
    ))?;
    repo.create_campaign(&NewCampaign::new(
        HUB_ID,
        "Grand opening".to_string(),
        120_000,
        today + Duration::days(30),
        None,
    ))?;

    Ok(())
}

fn seed_offers(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();

    repo.create_offer(&NewOffer::new(
        HUB_ID,
        OfferKind::Coupon,
        "SPRING-10".to_string(),
        "10% off any order".to_string(),
        Discount::Percent(10),
        Some(today - Duration::days(5)),
        Some(today + Duration::days(25)),
        Some(100),
    ))?;
    repo.create_offer(&NewOffer::new(
        HUB_ID,
        OfferKind::Voucher,
        "WELCOME-5".to_string(),
        "5 off your first visit".to_string(),
        Discount::Fixed(500),
        None,
        None,
        None,
    ))?;

    Ok(())
}

fn seed_gift_cards(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    repo.create_gift_card(&NewGiftCard::new(
        HUB_ID,
        "GC-DEMO-0001".to_string(),
        Some("friend@example.com".to_string()),
        5_000,
    ))?;
    repo.create_gift_card(&NewGiftCard::new(HUB_ID, "GC-DEMO-0002".to_string(), None, 2_500))?;

    Ok(())
}

fn seed_orders(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now().naive_utc();

    let orders: Vec<NewOrder> = (1..=8)
        .map(|i| {
            NewOrder::new(
                HUB_ID,
                format!("ORD-10{i:02}"),
                format!("Customer {i}"),
                format!("customer{i}@example.com"),
                1_000 + i64::from(i) * 350,
                now - Duration::hours(i64::from(i) * 7),
            )
        })
        .collect();
    repo.create_orders(&orders)?;

    // Walk a few orders forward so every status tab has data.
    let hub = HubId::new(HUB_ID)?;
    let seeded = repo.list_orders(hub)?;
    for (index, order) in seeded.iter().enumerate() {
        let id = localmart::domain::types::OrderId::new(order.id)?;
        match index % 4 {
            1 => {
                repo.set_order_status(id, &OrderStatus::Paid)?;
            }
            2 => {
                repo.set_order_status(id, &OrderStatus::Paid)?;
                repo.set_order_status(id, &OrderStatus::Fulfilled)?;
            }
            3 => {
                repo.set_order_status(id, &OrderStatus::Cancelled)?;
            }
            _ => {}
        }
    }

    Ok(())
}

fn seed_programs(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    repo.upsert_loyalty_program(&NewLoyaltyProgram::new(
        HUB_ID,
        "Springfield Regulars".to_string(),
        2,
        200,
        "Free coffee after 200 points".to_string(),
        true,
    ))?;

    repo.upsert_store_profile(&NewStoreProfile::new(
        HUB_ID,
        "Springfield Market".to_string(),
        Some("Your neighbourhood, online".to_string()),
        Some("hello@springfield.example".to_string()),
        None,
        Some("14 Market Sq, Springfield".to_string()),
        Some("Mon-Sat 8-20".to_string()),
        true,
    )?)?;

    Ok(())
}
