//! Default records written on first access.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Medication, NotificationItem, NotificationType, Order, OrderStatus, OrderType,
    PharmacyProfile,
};

/// Seeded `ready` orders carry a code that is good for this long.
const SEED_PICKUP_WINDOW_MINUTES: i64 = 20;

pub fn medications() -> Vec<Medication> {
    let rows = [
        (
            "1",
            "Paracétamol 500mg",
            "Acétaminophène",
            "analgesique",
            45,
            20,
            "3 500 FCFA",
            false,
            "123456789012",
            "Laboratoire X",
            "2025-12-31",
        ),
        (
            "2",
            "Ibuprofène 400mg",
            "",
            "anti-inflammatoire",
            12,
            15,
            "4 200 FCFA",
            false,
            "234567890123",
            "Laboratoire Y",
            "2025-10-15",
        ),
        (
            "3",
            "Amoxicilline 500mg",
            "",
            "antibiotique",
            8,
            10,
            "7 800 FCFA",
            true,
            "345678901234",
            "Laboratoire Z",
            "2025-09-30",
        ),
        (
            "4",
            "Vitamine C 1000mg",
            "Acide ascorbique",
            "vitamine",
            32,
            15,
            "8 900 FCFA",
            false,
            "456789012345",
            "Laboratoire A",
            "2026-03-20",
        ),
        (
            "5",
            "Oméprazole 20mg",
            "",
            "gastro",
            5,
            10,
            "12 500 FCFA",
            true,
            "567890123456",
            "Laboratoire B",
            "2025-11-15",
        ),
        (
            "6",
            "Doliprane 1000mg",
            "Paracétamol",
            "analgesique",
            60,
            25,
            "2 800 FCFA",
            false,
            "678901234567",
            "Sanofi",
            "2026-01-31",
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, generic, category, stock, min_stock, price, rx, barcode, maker, expiry)| {
                Medication {
                    id: id.into(),
                    name: name.into(),
                    generic_name: Some(generic.into()),
                    category: category.into(),
                    stock,
                    min_stock,
                    price: price.into(),
                    requires_prescription: rx,
                    barcode: Some(barcode.into()),
                    manufacturer: Some(maker.into()),
                    expiry_date: Some(expiry.into()),
                }
            },
        )
        .collect()
}

struct SeedOrder {
    id: &'static str,
    customer: &'static str,
    email: &'static str,
    phone: &'static str,
    status: OrderStatus,
    order_type: OrderType,
    items: i32,
    total: &'static str,
    time: &'static str,
    is_urgent: bool,
    pickup_code: Option<&'static str>,
    driver: Option<&'static str>,
}

pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    let rows = [
        SeedOrder {
            id: "PH-001",
            customer: "Kouassi Jean",
            email: "kouassi.jean@example.com",
            phone: "+225 01 11 22 33 44",
            status: OrderStatus::PendingPharmacy,
            order_type: OrderType::List,
            items: 3,
            total: "45 000 FCFA",
            time: "10:30",
            is_urgent: false,
            pickup_code: None,
            driver: None,
        },
        SeedOrder {
            id: "PH-002",
            customer: "Amani Marie",
            email: "amani.marie@example.com",
            phone: "+225 07 22 33 44 55",
            status: OrderStatus::Accepted,
            order_type: OrderType::Prescription,
            items: 2,
            total: "28 750 FCFA",
            time: "11:15",
            is_urgent: true,
            pickup_code: None,
            driver: None,
        },
        SeedOrder {
            id: "PH-003",
            customer: "Brou Didier",
            email: "brou.didier@example.com",
            phone: "+225 05 33 44 55 66",
            status: OrderStatus::Ready,
            order_type: OrderType::List,
            items: 5,
            total: "62 300 FCFA",
            time: "11:45",
            is_urgent: false,
            pickup_code: Some("8412"),
            driver: None,
        },
        SeedOrder {
            id: "PH-004",
            customer: "Koné Fatou",
            email: "kone.fatou@example.com",
            phone: "+225 01 44 55 66 77",
            status: OrderStatus::PendingPharmacy,
            order_type: OrderType::Prescription,
            items: 1,
            total: "12 500 FCFA",
            time: "12:00",
            is_urgent: false,
            pickup_code: None,
            driver: None,
        },
        SeedOrder {
            id: "PH-005",
            customer: "Yao Paul",
            email: "yao.paul@example.com",
            phone: "+225 07 55 66 77 88",
            status: OrderStatus::Ready,
            order_type: OrderType::List,
            items: 4,
            total: "38 900 FCFA",
            time: "12:30",
            is_urgent: true,
            pickup_code: Some("2295"),
            driver: None,
        },
        SeedOrder {
            id: "PH-006",
            customer: "Ndiaye Salma",
            email: "ndiaye.salma@example.com",
            phone: "+225 05 66 77 88 99",
            status: OrderStatus::Assigned,
            order_type: OrderType::List,
            items: 2,
            total: "19 500 FCFA",
            time: "13:10",
            is_urgent: false,
            pickup_code: Some("3047"),
            driver: Some("DRV-001"),
        },
    ];

    let pickup_expiry = now + Duration::minutes(SEED_PICKUP_WINDOW_MINUTES);
    rows.into_iter()
        .map(|row| Order {
            id: row.id.into(),
            customer: row.customer.into(),
            customer_email: Some(row.email.into()),
            customer_phone: Some(row.phone.into()),
            status: row.status,
            order_type: row.order_type,
            items: row.items,
            total: row.total.into(),
            time: row.time.into(),
            is_urgent: row.is_urgent,
            prescription_image: (row.order_type == OrderType::Prescription)
                .then(|| format!("mock://prescription-{}", &row.id[3..])),
            pickup_code: row.pickup_code.map(Into::into),
            pickup_code_expires_at: row.pickup_code.map(|_| pickup_expiry),
            assigned_driver_id: row.driver.map(Into::into),
            assigned_at: row.driver.map(|_| now),
            picked_up_at: None,
            delivered_at: None,
            created_at: now,
        })
        .collect()
}

pub fn profile() -> PharmacyProfile {
    PharmacyProfile {
        name: "Pharmacie Delymed".into(),
        address: "Rue des Jardins, Plateau, Abidjan, Côte d'Ivoire".into(),
        phone: "+225 01 02 03 04 05".into(),
        email: "contact@pharmaciedelymed.ci".into(),
        license_number: "PH-CI-2024-001".into(),
        member_since: "Janvier 2024".into(),
    }
}

pub fn notifications(now: DateTime<Utc>) -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: "notif-1".into(),
            title: "Nouvelle commande reçue".into(),
            description: "Commande #PH-006 en attente de préparation.".into(),
            time: "Il y a 5 min".into(),
            kind: NotificationType::Order,
            created_at: now,
        },
        NotificationItem {
            id: "notif-2".into(),
            title: "Stock faible".into(),
            description: "Paracétamol 500mg en dessous du seuil minimal.".into(),
            time: "Il y a 20 min".into(),
            kind: NotificationType::Stock,
            created_at: now,
        },
    ]
}
