mod common;

use chrono::{Datelike, Local};

use delymed_pharmacy::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        orders::CreateOrderRequest,
        profile::UpdateProfileRequest,
    },
    error::AppError,
    models::OrderStatus,
    services::{
        auth_service, dashboard_service, medication_service, order_service, profile_service,
    },
};

#[tokio::test]
async fn session_gate_follows_the_auth_flag() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;
    assert!(matches!(
        auth_service::ensure_logged_in(&state).await,
        Err(AppError::Unauthenticated)
    ));

    let err = auth_service::login(
        &state,
        LoginRequest {
            email: "staff@pharmacie.ci".into(),
            password: "".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(!auth_service::is_logged_in(&state).await);

    auth_service::login(
        &state,
        LoginRequest {
            email: "staff@pharmacie.ci".into(),
            password: "secret".into(),
        },
    )
    .await?;
    auth_service::ensure_logged_in(&state).await?;

    auth_service::logout(&state).await?;
    assert!(!auth_service::is_logged_in(&state).await);
    Ok(())
}

#[tokio::test]
async fn register_saves_profile_defaults_and_logs_in() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let mismatch = RegisterRequest {
        pharmacy_name: "Pharmacie Cocody".into(),
        email: "cocody@pharma.ci".into(),
        password: "abc".into(),
        confirm: "abd".into(),
        ..Default::default()
    };
    let err = auth_service::register(&state, mismatch).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let profile = auth_service::register(
        &state,
        RegisterRequest {
            pharmacy_name: "Pharmacie Cocody".into(),
            email: "cocody@pharma.ci".into(),
            phone: Some("".into()),
            password: "abc".into(),
            confirm: "abc".into(),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(profile.name, "Pharmacie Cocody");
    assert_eq!(profile.phone, "+225");
    assert_eq!(profile.license_number, "PH-CI-XXXX");
    assert_eq!(profile.address, "Abidjan, Côte d'Ivoire");
    let today = Local::now();
    assert_eq!(
        profile.member_since,
        auth_service::member_since_label(today.month(), today.year())
    );
    assert!(auth_service::is_logged_in(&state).await);
    assert_eq!(profile_service::get_profile(&state).await?, profile);
    Ok(())
}

#[test]
fn member_since_uses_french_month_names() {
    assert_eq!(auth_service::member_since_label(1, 2024), "janvier 2024");
    assert_eq!(auth_service::member_since_label(8, 2026), "août 2026");
}

#[tokio::test]
async fn profile_update_rejects_blank_values() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let updated = profile_service::update_profile(
        &state,
        UpdateProfileRequest {
            phone: Some("+225 07 00 00 00 00".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(updated.phone, "+225 07 00 00 00 00");
    assert_eq!(updated.name, "Pharmacie Delymed");

    let err = profile_service::update_profile(
        &state,
        UpdateProfileRequest {
            email: Some("   ".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(profile_service::get_profile(&state).await?.email, "contact@pharmaciedelymed.ci");
    Ok(())
}

#[tokio::test]
async fn summary_counts_seeded_records() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;
    let summary = dashboard_service::summary(&state).await?;

    assert_eq!(summary.orders_total, 6);
    assert_eq!(summary.to_prepare, 3);
    assert_eq!(summary.ready, 2);
    assert_eq!(summary.urgent, 2);
    assert_eq!(summary.orders_by_status.get(&OrderStatus::Assigned), Some(&1));
    assert_eq!(summary.medications_total, 6);
    assert_eq!(summary.low_stock, 3);
    assert_eq!(summary.out_of_stock, 0);
    assert_eq!(summary.medications_by_category.get("analgesique"), Some(&2));
    assert_eq!(summary.delivered_revenue_fcfa, 0);
    Ok(())
}

#[tokio::test]
async fn summary_tracks_deliveries_and_stock_changes() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;
    let order =
        order_service::create_order(&state, CreateOrderRequest::new("Jean", 3, "45 000 FCFA"))
            .await?;
    order_service::update_order_status(&state, &order.id, OrderStatus::Delivered).await?;
    order_service::update_order_status(&state, "PH-006", OrderStatus::Delivered).await?;
    medication_service::adjust_stock(&state, "3", -8).await?;

    let summary = dashboard_service::summary(&state).await?;
    assert_eq!(summary.orders_total, 7);
    assert_eq!(summary.delivered_revenue_fcfa, 45_000 + 19_500);
    assert_eq!(summary.out_of_stock, 1);
    assert_eq!(summary.low_stock, 3);
    Ok(())
}

#[test]
fn amounts_are_read_from_display_totals() {
    assert_eq!(dashboard_service::parse_amount("62 300 FCFA"), Some(62_300));
    assert_eq!(dashboard_service::parse_amount("45000 FCFA"), Some(45_000));
    assert_eq!(dashboard_service::parse_amount("gratuit"), None);
}

#[tokio::test]
async fn delivered_revenue_saturates_on_huge_totals() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;
    for total in ["18446744073709551615 FCFA", "1 FCFA", "99999999999999999999 FCFA"] {
        let order =
            order_service::create_order(&state, CreateOrderRequest::new("Awa", 1, total)).await?;
        order_service::update_order_status(&state, &order.id, OrderStatus::Delivered).await?;
    }

    let summary = dashboard_service::summary(&state).await?;
    assert_eq!(summary.delivered_revenue_fcfa, u64::MAX);
    assert_eq!(
        dashboard_service::parse_amount("99999999999999999999 FCFA"),
        None
    );
    Ok(())
}
