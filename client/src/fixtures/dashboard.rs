//! Seed data for the dashboard views.
//!
//! Every call returns a fresh copy; views own and mutate their copy only.

use time::macros::{date, datetime};

use crate::state::bom::{BomItem, BomStatus};
use crate::state::discovery::Supplier;
use crate::state::erp::{ErpExport, ErpFormat, ExportStatus};
use crate::state::nav::{NavKey, NavigationItem, UserProfile};
use crate::state::notify::NoticeLevel;
use crate::state::overview::{Activity, ActivityKind, ChangeKind, Insight, Kpi, KpiKind, QuickAction};
use crate::state::quotes::Quote;
use crate::state::rfq::{RfqProject, RfqStatus};

/// Starter card of the RFQ view; "use" copies the name into the create form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RfqTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[must_use]
pub fn user() -> UserProfile {
    UserProfile {
        name: "Ahmet Yılmaz".to_owned(),
        company: "Bosch Türkiye A.Ş.".to_owned(),
        role: "Satın Alma Müdürü".to_owned(),
        avatar: "AY".to_owned(),
    }
}

#[must_use]
pub fn navigation() -> Vec<NavigationItem> {
    let entries = [
        (NavKey::Dashboard, "Dashboard", "▦"),
        (NavKey::BomUpload, "BOM/CAD Yükleme", "⇧"),
        (NavKey::SupplierDiscovery, "Tedarikçi Keşfi", "⚲"),
        (NavKey::RfqManagement, "RFQ Yönetimi", "✉"),
        (NavKey::QuoteMatrix, "Teklif Skorlama", "▥"),
        (NavKey::ErpExport, "ERP Export", "⛁"),
    ];
    entries
        .into_iter()
        .map(|(key, name, icon)| NavigationItem {
            key,
            name: name.to_owned(),
            icon: icon.to_owned(),
            href: format!("/{}", key.id()),
        })
        .collect()
}

#[must_use]
pub fn kpis() -> Vec<Kpi> {
    let rows = [
        (KpiKind::TotalRfq, "Toplam RFQ", "47", "+12%", ChangeKind::Positive, "▤", "Bu ay"),
        (KpiKind::AverageSavings, "Ortalama Tasarruf", "%8.3", "+2.1%", ChangeKind::Positive, "↘", "Son 3 ay"),
        (KpiKind::ActiveProjects, "Aktif Projeler", "12", "-3", ChangeKind::Neutral, "▣", "Devam eden"),
        (KpiKind::QuoteTurnaround, "Teklif Süresi", "36 Saat", "-12h", ChangeKind::Positive, "◷", "Ortalama"),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((kind, title, value, change, change_kind, icon, description), id)| Kpi {
            id,
            kind,
            title: title.to_owned(),
            value: value.to_owned(),
            change: change.to_owned(),
            change_kind,
            icon: icon.to_owned(),
            description: description.to_owned(),
        })
        .collect()
}

#[must_use]
pub fn activities() -> Vec<Activity> {
    let rows = [
        (
            ActivityKind::RfqCompleted,
            "Metal Parça RFQ'su tamamlandı",
            "7 tedarikçiden teklif alındı, %12 tasarruf sağlandı",
            "2 saat önce",
            NoticeLevel::Success,
        ),
        (
            ActivityKind::SupplierMatched,
            "Yeni tedarikçi eşleştirmesi",
            "Plastik parçalar için 5 yeni tedarikçi bulundu",
            "4 saat önce",
            NoticeLevel::Info,
        ),
        (
            ActivityKind::QuoteReceived,
            "Otomatik teklif alındı",
            "Ankara Makine'den elektronik komponent teklifi",
            "6 saat önce",
            NoticeLevel::Info,
        ),
        (
            ActivityKind::ExportCompleted,
            "ERP Export tamamlandı",
            "SAP formatında 25 teklif verileri aktarıldı",
            "1 gün önce",
            NoticeLevel::Success,
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((kind, title, description, timestamp, tone), id)| Activity {
            id,
            kind,
            title: title.to_owned(),
            description: description.to_owned(),
            timestamp: timestamp.to_owned(),
            tone,
        })
        .collect()
}

#[must_use]
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            target: NavKey::BomUpload,
            title: "BOM/CAD Yükle",
            description: "Yeni parça listesi yükleyin",
            icon: "⇧",
        },
        QuickAction {
            target: NavKey::SupplierDiscovery,
            title: "Tedarikçi Bul",
            description: "AI ile tedarikçi keşfedin",
            icon: "⚲",
        },
        QuickAction {
            target: NavKey::RfqManagement,
            title: "RFQ Başlat",
            description: "Yeni teklif talebi oluşturun",
            icon: "✉",
        },
        QuickAction {
            target: NavKey::QuoteMatrix,
            title: "Teklifleri Analiz Et",
            description: "Skorlama matrisini görüntüleyin",
            icon: "▥",
        },
    ]
}

#[must_use]
pub fn bom_items() -> Vec<BomItem> {
    let rows = [
        ("MP-001", "Metal Döküm Parça", "1000", "Döküm", BomStatus::Mapped, 7),
        ("PL-045", "Plastik Kapak", "500", "Plastik", BomStatus::Pending, 3),
        ("EL-123", "Elektronik Kart", "100", "Elektronik", BomStatus::Mapped, 12),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((part_number, description, quantity, category, status, suppliers), id)| BomItem {
            id,
            part_number: part_number.to_owned(),
            description: description.to_owned(),
            quantity: quantity.to_owned(),
            unit: "adet".to_owned(),
            category: category.to_owned(),
            status,
            suppliers,
        })
        .collect()
}

#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "Konya Metal San. Ltd.".to_owned(),
            location: "Konya OSB".to_owned(),
            rating: 4.8,
            specialties: strings(&["Döküm", "CNC Tezgahı"]),
            response_time_hours: 2,
            certifications: strings(&["ISO 9001", "TS 16949"]),
            match_score: 95,
            contact_person: "Mehmet Demir".to_owned(),
        },
        Supplier {
            id: 2,
            name: "Ankara Plastik A.Ş.".to_owned(),
            location: "Ankara Siteler".to_owned(),
            rating: 4.6,
            specialties: strings(&["Enjeksiyon", "Kalıplama"]),
            response_time_hours: 4,
            certifications: strings(&["ISO 9001"]),
            match_score: 89,
            contact_person: "Ayşe Kaya".to_owned(),
        },
        Supplier {
            id: 3,
            name: "İzmir Elektronik Ltd.".to_owned(),
            location: "İzmir Atatürk OSB".to_owned(),
            rating: 4.9,
            specialties: strings(&["PCB", "Elektronik Montaj"]),
            response_time_hours: 1,
            certifications: strings(&["ISO 9001", "IPC-A-610"]),
            match_score: 92,
            contact_person: "Can Özkan".to_owned(),
        },
    ]
}

#[must_use]
pub fn supplier_insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Yeni Tedarikçi Keşfi",
            body: "Metal parçalar için 3 yeni potansiyel tedarikçi bulundu",
            action: Some("Görüntüle"),
        },
        Insight {
            title: "Coğrafi Optimizasyon",
            body: "Yakın lokasyonlarda daha uygun tedarikçiler mevcut",
            action: Some("Analiz Et"),
        },
    ]
}

#[must_use]
pub fn rfq_projects() -> Vec<RfqProject> {
    vec![
        RfqProject {
            id: 1,
            project_name: "Q1 2024 Metal Parçalar".to_owned(),
            status: RfqStatus::Active,
            total_items: 15,
            suppliers_contacted: 8,
            quotes_received: 6,
            deadline: date!(2024-02-15),
            estimated_savings: Some(12.0),
            created_at: date!(2024-01-10),
        },
        RfqProject {
            id: 2,
            project_name: "Plastik Komponentler".to_owned(),
            status: RfqStatus::Completed,
            total_items: 8,
            suppliers_contacted: 5,
            quotes_received: 5,
            deadline: date!(2024-01-30),
            estimated_savings: Some(8.0),
            created_at: date!(2024-01-05),
        },
        RfqProject {
            id: 3,
            project_name: "Elektronik Kartlar RFQ".to_owned(),
            status: RfqStatus::Draft,
            total_items: 12,
            suppliers_contacted: 0,
            quotes_received: 0,
            deadline: date!(2024-03-01),
            estimated_savings: None,
            created_at: date!(2024-01-20),
        },
    ]
}

#[must_use]
pub fn rfq_templates() -> Vec<RfqTemplate> {
    vec![
        RfqTemplate { name: "Metal Parçalar", description: "Döküm ve CNC parçalar için standart şablon" },
        RfqTemplate { name: "Plastik Komponentler", description: "Enjeksiyon kalıplama şablonu" },
        RfqTemplate { name: "Elektronik Kartlar", description: "PCB ve elektronik montaj şablonu" },
    ]
}

#[must_use]
pub fn quotes() -> Vec<Quote> {
    let rows = [
        ("Konya Metal San.", 125.50, 14, "5000/ay", "A+", [94, 90, 95, 98, 92, 96]),
        ("Bursa Döküm Ltd.", 135.00, 10, "3000/ay", "A", [87, 82, 98, 85, 88, 90]),
        ("Ankara Makine", 145.75, 21, "8000/ay", "A-", [79, 75, 80, 95, 82, 85]),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((supplier, price, lead_time_days, capacity, quality, scores), id)| {
            let [total, price_score, time_score, capacity_score, quality_score, risk_score] = scores;
            Quote {
                id,
                part_number: "MP-001".to_owned(),
                supplier: supplier.to_owned(),
                price,
                lead_time_days,
                capacity: capacity.to_owned(),
                quality: quality.to_owned(),
                total_score: total,
                price_score,
                time_score,
                capacity_score,
                quality_score,
                risk_score,
            }
        })
        .collect()
}

#[must_use]
pub fn quote_insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "En İyi Seçim",
            body: "Konya Metal San. hem fiyat hem kalite açısından en dengeli seçim. %12 tasarruf sağlayabilirsiniz.",
            action: None,
        },
        Insight {
            title: "Hızlı Teslimat",
            body: "Acil projeler için Bursa Döküm Ltd. 10 günde teslimat yapabilir.",
            action: None,
        },
    ]
}

#[must_use]
pub fn erp_exports() -> Vec<ErpExport> {
    vec![
        ErpExport {
            id: 1,
            name: "Q1 2024 Metal Parçalar".to_owned(),
            format: ErpFormat::Sap,
            records: 25,
            size_mb: 2.3,
            created_at: datetime!(2024-01-20 14:30),
            status: ExportStatus::Completed,
        },
        ErpExport {
            id: 2,
            name: "Plastik Komponentler".to_owned(),
            format: ErpFormat::Netsis,
            records: 15,
            size_mb: 1.8,
            created_at: datetime!(2024-01-18 11:15),
            status: ExportStatus::Completed,
        },
        ErpExport {
            id: 3,
            name: "Elektronik Export".to_owned(),
            format: ErpFormat::Logo,
            records: 32,
            size_mb: 3.1,
            created_at: datetime!(2024-01-15 9:45),
            status: ExportStatus::Processing,
        },
    ]
}
