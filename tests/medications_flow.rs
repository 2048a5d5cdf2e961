mod common;

use delymed_pharmacy::{
    dto::medications::{CreateMedicationRequest, MedicationView, UpdateMedicationRequest},
    error::AppError,
    models::{NotificationType, StockStatus},
    params::{CategoryFilter, MedicationQuery},
    services::{medication_service, notification_service},
};

fn names(list: &[delymed_pharmacy::models::Medication]) -> Vec<&str> {
    list.iter().map(|m| m.name.as_str()).collect()
}

#[tokio::test]
async fn search_is_case_insensitive_across_name_generic_and_manufacturer() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let found = medication_service::list_medications(&state, &MedicationQuery::search("amoxi")).await?;
    assert_eq!(names(&found), vec!["Amoxicilline 500mg"]);

    let found = medication_service::list_medications(&state, &MedicationQuery::search("AMOXI")).await?;
    assert_eq!(names(&found), vec!["Amoxicilline 500mg"]);

    // "Paracétamol" is the generic name of Doliprane.
    let found =
        medication_service::list_medications(&state, &MedicationQuery::search("paracétamol")).await?;
    assert_eq!(names(&found), vec!["Paracétamol 500mg", "Doliprane 1000mg"]);

    let found = medication_service::list_medications(&state, &MedicationQuery::search("sanofi")).await?;
    assert_eq!(names(&found), vec!["Doliprane 1000mg"]);

    let found = medication_service::list_medications(&state, &MedicationQuery::search("")).await?;
    assert_eq!(found.len(), 6);
    Ok(())
}

#[tokio::test]
async fn category_filters_match_exactly_or_by_low_stock() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let analgesics = medication_service::list_medications(
        &state,
        &MedicationQuery::category("analgesique".parse().unwrap()),
    )
    .await?;
    assert_eq!(names(&analgesics), vec!["Paracétamol 500mg", "Doliprane 1000mg"]);

    let partial = medication_service::list_medications(
        &state,
        &MedicationQuery::category(CategoryFilter::Category("analg".into())),
    )
    .await?;
    assert!(partial.is_empty());

    let low = medication_service::list_medications(
        &state,
        &MedicationQuery::category("low-stock".parse().unwrap()),
    )
    .await?;
    assert_eq!(
        names(&low),
        vec!["Ibuprofène 400mg", "Amoxicilline 500mg", "Oméprazole 20mg"]
    );

    let low_and_searched = medication_service::list_medications(
        &state,
        &MedicationQuery {
            category: CategoryFilter::LowStock,
            search: Some("laboratoire z".into()),
        },
    )
    .await?;
    assert_eq!(names(&low_and_searched), vec!["Amoxicilline 500mg"]);
    Ok(())
}

#[tokio::test]
async fn created_medication_is_listed_first_with_default_category() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let created = medication_service::create_medication(
        &state,
        CreateMedicationRequest {
            name: "Ciprofloxacine 500mg".into(),
            stock: 0,
            min_stock: 5,
            price: "9 000 FCFA".into(),
            requires_prescription: true,
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(created.category, "autre");
    assert_eq!(created.stock_status(), StockStatus::OutOfStock);
    let list = medication_service::list_medications(&state, &MedicationQuery::default()).await?;
    assert_eq!(list.len(), 7);
    assert_eq!(list[0], created);
    assert_eq!(medication_service::get_medication(&state, &created.id).await?, created);
    Ok(())
}

#[tokio::test]
async fn create_medication_validates_required_fields() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    for payload in [
        CreateMedicationRequest {
            name: "".into(),
            price: "1 FCFA".into(),
            ..Default::default()
        },
        CreateMedicationRequest {
            name: "Zinc".into(),
            price: " ".into(),
            ..Default::default()
        },
        CreateMedicationRequest {
            name: "Zinc".into(),
            price: "1 FCFA".into(),
            stock: -1,
            ..Default::default()
        },
    ] {
        let err = medication_service::create_medication(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
    assert_eq!(state.store.get_medications().await?.len(), 6);
    Ok(())
}

#[tokio::test]
async fn update_applies_only_provided_fields() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let updated = medication_service::update_medication(
        &state,
        "2",
        UpdateMedicationRequest {
            stock: Some(40),
            manufacturer: Some("Laboratoire Y2".into()),
            category: Some("".into()),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(updated.name, "Ibuprofène 400mg");
    assert_eq!(updated.stock, 40);
    assert_eq!(updated.min_stock, 15);
    assert_eq!(updated.category, "autre");
    assert_eq!(updated.manufacturer.as_deref(), Some("Laboratoire Y2"));
    assert_eq!(medication_service::get_medication(&state, "2").await?, updated);

    let err = medication_service::update_medication(
        &state,
        "2",
        UpdateMedicationRequest {
            min_stock: Some(-3),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(medication_service::get_medication(&state, "2").await?.min_stock, 15);
    Ok(())
}

#[tokio::test]
async fn delete_removes_and_unknown_ids_are_not_found() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let removed = medication_service::delete_medication(&state, "4").await?;
    assert_eq!(removed.name, "Vitamine C 1000mg");
    assert!(medication_service::get_medication(&state, "4").await.unwrap_err().is_not_found());
    assert!(medication_service::delete_medication(&state, "4").await.unwrap_err().is_not_found());
    assert!(
        medication_service::update_medication(&state, "nope", UpdateMedicationRequest::default())
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert_eq!(state.store.get_medications().await?.len(), 5);
    Ok(())
}

#[tokio::test]
async fn stock_adjustment_never_goes_negative() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;

    let err = medication_service::adjust_stock(&state, "5", -6).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let err = medication_service::adjust_stock(&state, "5", 0).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let emptied = medication_service::adjust_stock(&state, "5", -5).await?;
    assert_eq!(emptied.stock, 0);
    assert_eq!(emptied.stock_status(), StockStatus::OutOfStock);
    Ok(())
}

#[tokio::test]
async fn falling_under_threshold_raises_one_stock_notification() -> anyhow::Result<()> {
    let state = common::fresh_state().await?;
    let before = notification_service::list_notifications(&state).await?.len();

    let adjusted = medication_service::adjust_stock(&state, "1", -30).await?;
    assert_eq!(adjusted.stock, 15);
    assert_eq!(adjusted.stock_status(), StockStatus::Low);

    let notifications = notification_service::list_notifications(&state).await?;
    assert_eq!(notifications.len(), before + 1);
    assert_eq!(notifications[0].kind, NotificationType::Stock);
    assert!(notifications[0].description.contains("Paracétamol 500mg"));

    medication_service::adjust_stock(&state, "1", -1).await?;
    medication_service::adjust_stock(&state, "1", 20).await?;
    assert_eq!(
        notification_service::list_notifications(&state).await?.len(),
        before + 1
    );
    Ok(())
}

#[test]
fn medication_view_carries_the_derived_status() {
    let medication = delymed_pharmacy::seed::medications().remove(2);
    let json = serde_json::to_value(MedicationView::from(medication)).unwrap();
    assert_eq!(json["name"], "Amoxicilline 500mg");
    assert_eq!(json["minStock"], 10);
    assert_eq!(json["stockStatus"], "low");
}
