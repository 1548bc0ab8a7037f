//! Static content of the marketing landing page.

use crate::state::landing::DemoField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

/// Headline metric shown under the hero and in the ROI band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Audience {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Input of the demo-request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub field: DemoField,
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const BRAND: &str = "Tesora";
pub const BRAND_TAGLINE: &str = "Türkiye imalat sektörü için geliştirilmiş yapay zekâ destekli tedarik platformu.";
pub const CONTACT_EMAIL: &str = "info@tesora.com.tr";
pub const CONTACT_CITY: &str = "İstanbul, Türkiye";

pub const HERO: Hero = Hero {
    badge: "Türkiye İmalat Sektörü için Özel Çözüm",
    title: "Tesora for Manufacturing",
    subtitle: "Yapay Zekâ Destekli Tedarikçi Keşfi ve RFQ Otomasyonu",
    description: "Türkiye imalat sektörü için geliştirilmiş akıllı tedarik platformu. Satın alma süreçlerinizi hızlandırın, maliyetlerinizi düşürün.",
    cta: "Ücretsiz Demo Talep Et",
};

pub const HERO_STATS: [Stat; 2] = [
    Stat { value: "48 Saat", label: "RFQ Tamamlama" },
    Stat { value: "%5-15", label: "Maliyet Tasarrufu" },
];

pub const HEADER_LINKS: [Link; 4] = [
    Link { name: "Özellikler", href: "#features" },
    Link { name: "Avantajlar", href: "#benefits" },
    Link { name: "Demo", href: "#demo" },
    Link { name: "İletişim", href: "#contact" },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "BOM/CAD Yükleme",
        description: "CSV ve PDF formatlarında BOM/CAD dosyalarınızı yükleyin. Manuel düzenleme ile kalemleri eşleştirin.",
        icon: "⇧",
    },
    Feature {
        title: "AI Tedarikçi Eşleştirme",
        description: "Türkiye OSB ve ticaret dizini ile semantic search. Her kalem için minimum 5 tedarikçi önerisi.",
        icon: "✦",
    },
    Feature {
        title: "RFQ Otomasyonu",
        description: "Otomatik RFP/RFQ e-posta gönderimi. 5-10 tedarikçiye aynı anda teklif talebi gönderin.",
        icon: "✉",
    },
    Feature {
        title: "Teklif Skorlama",
        description: "Fiyat, teslim süresi, kapasite, sertifika ve risk kriterlerine göre otomatik skorlama.",
        icon: "▥",
    },
];

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "RFQ Tamamlama Süresi",
        value: "<48 Saat",
        description: "Geleneksel süreçlere göre %75 daha hızlı",
        icon: "◷",
    },
    Benefit {
        title: "Tasarruf Hedefi",
        value: "%5-15",
        description: "RFP başına ortalama maliyet tasarrufu",
        icon: "↘",
    },
    Benefit {
        title: "Tedarikçi Önerisi",
        value: "5+ Tedarikçi",
        description: "Her kalem için minimum tedarikçi sayısı",
        icon: "☷",
    },
    Benefit {
        title: "ERP Entegrasyonu",
        value: "Netsis, Logo, SAP",
        description: "Mevcut sistemlerinizle uyumlu CSV export",
        icon: "⛁",
    },
];

pub const ROI_STATS: [Stat; 3] = [
    Stat { value: "48 Saat", label: "RFQ Tamamlama" },
    Stat { value: "%75", label: "Süre Tasarrufu" },
    Stat { value: "%5-15", label: "Maliyet Tasarrufu" },
];

pub const AUDIENCES: [Audience; 3] = [
    Audience {
        title: "Orta ve Büyük Ölçekli Firmalar",
        description: "250+ çalışan üretim şirketleri",
        icon: "▦",
    },
    Audience {
        title: "Satın Alma Yöneticileri",
        description: "Tedarik zinciri optimizasyonu",
        icon: "⛟",
    },
    Audience {
        title: "Üretim Mühendisleri",
        description: "Teknik spesifikasyon yönetimi",
        icon: "⚙",
    },
];

/// Text inputs of the demo form. The employee-count select is rendered
/// separately from `EmployeeRange::ALL`.
pub const DEMO_TEXT_FIELDS: [FormField; 4] = [
    FormField { field: DemoField::CompanyName, id: "companyName", label: "Şirket Adı", input_type: "text" },
    FormField { field: DemoField::ContactName, id: "contactName", label: "İletişim Kişisi", input_type: "text" },
    FormField { field: DemoField::Email, id: "email", label: "E-posta", input_type: "email" },
    FormField { field: DemoField::Phone, id: "phone", label: "Telefon", input_type: "tel" },
];

pub const DEMO_PROMISES: [Stat; 3] = [
    Stat { value: "24 Saat İçinde", label: "İlk iletişim" },
    Stat { value: "30 Dakika", label: "Demo süresi" },
    Stat { value: "Kişiselleştirilmiş", label: "Sektörünüze özel sunum" },
];

pub const FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "Ürün",
        links: &[
            Link { name: "Özellikler", href: "#features" },
            Link { name: "Fiyatlandırma", href: "#pricing" },
            Link { name: "Demo", href: "#demo" },
        ],
    },
    LinkGroup {
        title: "Şirket",
        links: &[
            Link { name: "Hakkımızda", href: "#about" },
            Link { name: "İletişim", href: "#contact" },
            Link { name: "Kariyer", href: "#careers" },
        ],
    },
    LinkGroup {
        title: "Destek",
        links: &[
            Link { name: "Yardım Merkezi", href: "#help" },
            Link { name: "Dokümantasyon", href: "#docs" },
            Link { name: "API", href: "#api" },
        ],
    },
];
