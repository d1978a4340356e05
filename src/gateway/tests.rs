use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mongodb::bson::doc;

use super::*;
use crate::db::memory::MemoryStore;
use crate::models::{
    Contact, ContactCreate, Insight, InsightCreate, InsightUpdate, Patch, Performance,
    PerformanceUpdate, Profile, ProfileUpdate, StatusCheck, StatusCheckCreate, Testimonial,
    TestimonialCreate, TestimonialUpdate,
};

fn gateway() -> (Gateway, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Gateway::new(store.clone()), store)
}

fn testimonial(rating: i32) -> TestimonialCreate {
    TestimonialCreate {
        name: "Alex Morgan".into(),
        role: "Retired Engineer".into(),
        content: "Clear communication and steady results.".into(),
        rating,
    }
}

fn contact(email: &str) -> ContactCreate {
    ContactCreate {
        name: "Dana".into(),
        email: email.into(),
        phone: None,
        investment_goal: Some("Retirement".into()),
        message: Some("Let's talk.".into()),
    }
}

#[tokio::test]
async fn test_create_issues_fresh_ids() {
    let (gateway, _) = gateway();

    let mut seen = HashSet::new();
    for i in 0..20 {
        let check: StatusCheck = gateway
            .create(StatusCheckCreate {
                client_name: format!("client-{}", i),
            })
            .await
            .unwrap();
        assert!(seen.insert(check.id));
    }
}

#[tokio::test]
async fn test_timestamp_round_trips_through_store() {
    let instant = Utc.timestamp_opt(1_760_000_000, 987_654_321).unwrap();
    let (gateway, store) = gateway();
    let gateway = gateway.with_clock(Arc::new(move || instant));

    let created: StatusCheck = gateway
        .create(StatusCheckCreate {
            client_name: "acme".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.timestamp, instant);

    let raw = store.raw(StatusCheck::COLLECTION);
    assert_eq!(
        raw[0].get_str("timestamp").unwrap(),
        "2025-10-09T08:53:20.987654321Z"
    );

    let listed: Vec<StatusCheck> = gateway.list().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_injected_id_source() {
    let counter = Arc::new(AtomicUsize::new(0));
    let ids = {
        let counter = counter.clone();
        Arc::new(move || format!("id-{}", counter.fetch_add(1, Ordering::SeqCst)))
    };
    let (gateway, _) = gateway();
    let gateway = gateway.with_id_source(ids);

    let first: Testimonial = gateway.create(testimonial(5)).await.unwrap();
    let second: Testimonial = gateway.create(testimonial(4)).await.unwrap();
    assert_eq!(first.id, "id-0");
    assert_eq!(second.id, "id-1");
}

#[tokio::test]
async fn test_rating_bounds_on_create() {
    let (gateway, store) = gateway();

    for rating in [0, 6] {
        let err = gateway
            .create::<Testimonial>(testimonial(rating))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "rating {}", rating);
    }
    assert!(store.raw(Testimonial::COLLECTION).is_empty());

    for rating in [1, 5] {
        let created: Testimonial = gateway.create(testimonial(rating)).await.unwrap();
        assert_eq!(created.rating, rating);
        assert!(created.is_active);
    }
}

#[tokio::test]
async fn test_contact_email_validation() {
    let (gateway, _) = gateway();

    let err = gateway
        .create::<Contact>(contact("not-an-email"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let created: Contact = gateway.create(contact("a@b.com")).await.unwrap();
    assert_eq!(created.email, "a@b.com");
    assert_eq!(created.status, "new");
}

#[tokio::test]
async fn test_validation_precedes_store_io() {
    let (gateway, store) = gateway();
    store.go_offline();

    let err = gateway
        .create::<Testimonial>(testimonial(9))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = gateway
        .create::<Testimonial>(testimonial(3))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
}

#[tokio::test]
async fn test_single_field_update_leaves_rest() {
    let (gateway, _) = gateway();
    let created: Testimonial = gateway.create(testimonial(4)).await.unwrap();

    let update = TestimonialUpdate {
        is_active: Patch::Value(false),
        ..Default::default()
    };
    let updated: Testimonial = gateway.update(&created.id, update).await.unwrap();

    assert!(!updated.is_active);
    assert_eq!(
        Testimonial {
            is_active: true,
            ..updated.clone()
        },
        created
    );

    let stored: Testimonial = gateway.get(&created.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (gateway, _) = gateway();
    let err = gateway
        .update::<Insight>("missing", InsightUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_rejects_out_of_range_rating() {
    let (gateway, _) = gateway();
    let created: Testimonial = gateway.create(testimonial(4)).await.unwrap();

    let update = TestimonialUpdate {
        rating: Patch::Value(0),
        ..Default::default()
    };
    let err = gateway
        .update::<Testimonial>(&created.id, update)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let stored: Testimonial = gateway.get(&created.id).await.unwrap();
    assert_eq!(stored.rating, 4);
}

#[tokio::test]
async fn test_insight_derived_fields() {
    let instant = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let (gateway, _) = gateway();
    let gateway = gateway.with_clock(Arc::new(move || instant));

    let insight: Insight = gateway
        .create(InsightCreate {
            title: "Navigating Volatility".into(),
            excerpt: "What the quarter holds".into(),
            content: None,
            category: "Market Analysis".into(),
            read_time: "5 min read".into(),
        })
        .await
        .unwrap();

    assert_eq!(insight.date, "October 16, 2026");
    assert!(insight.is_published);
}

#[tokio::test]
async fn test_list_is_capped_and_hides_internal_id() {
    let (gateway, store) = gateway();
    for i in 0..(LIST_CAP + 5) {
        store
            .insert_one(
                StatusCheck::COLLECTION,
                doc! {
                    "id": i.to_string(),
                    "client_name": "bulk",
                    "timestamp": "2026-01-01T00:00:00Z",
                },
            )
            .await
            .unwrap();
    }

    let listed: Vec<StatusCheck> = gateway.list().await.unwrap();
    assert_eq!(listed.len() as i64, LIST_CAP);

    let raw = store.find_many(StatusCheck::COLLECTION, LIST_CAP).await.unwrap();
    assert!(raw.iter().all(|d| !d.contains_key(INTERNAL_ID)));
}

#[tokio::test]
async fn test_singleton_created_on_first_read() {
    let (gateway, store) = gateway();

    let first: Profile = gateway.get_singleton().await.unwrap();
    assert_eq!(first.name, "Juniper Broz");
    assert_eq!(store.raw(Profile::COLLECTION).len(), 1);

    let second: Profile = gateway.get_singleton().await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(store.raw(Profile::COLLECTION).len(), 1);
}

#[tokio::test]
async fn test_singleton_partial_update() {
    let (gateway, _) = gateway();

    let update = ProfileUpdate {
        years_experience: Patch::Value(13),
        ..Default::default()
    };
    let updated: Profile = gateway.update_singleton(update).await.unwrap();
    assert_eq!(updated.years_experience, 13);
    assert_eq!(updated.clients_served, 500);

    let reread: Profile = gateway.get_singleton().await.unwrap();
    assert_eq!(reread, updated);

    let update = PerformanceUpdate {
        disclaimer: Patch::Value("Returns are illustrative.".into()),
        ..Default::default()
    };
    let performance: Performance = gateway.update_singleton(update).await.unwrap();
    assert_eq!(performance.disclaimer, "Returns are illustrative.");
    assert_eq!(performance.summary.ytd_return, "+18.4%");
}
