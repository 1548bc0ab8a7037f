//! Dashboard shell at `/dashboard`: sidebar plus the active view.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::views::bom_upload::BomUploadView;
use crate::components::views::erp_export::ErpExportView;
use crate::components::views::overview::OverviewView;
use crate::components::views::quote_matrix::QuoteMatrixView;
use crate::components::views::rfq_management::RfqManagementView;
use crate::components::views::supplier_discovery::SupplierDiscoveryView;
use crate::state::nav::{NavKey, ShellState};

/// Switching views drops the previous view's local state.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());
    let active = Memo::new(move |_| shell.get().active);

    view! {
        <div class="dashboard">
            <Sidebar shell=shell/>
            <main class="dashboard__content">
                {move || match active.get() {
                    NavKey::Dashboard => view! { <OverviewView shell=shell/> }.into_any(),
                    NavKey::BomUpload => view! { <BomUploadView/> }.into_any(),
                    NavKey::SupplierDiscovery => view! { <SupplierDiscoveryView/> }.into_any(),
                    NavKey::RfqManagement => view! { <RfqManagementView/> }.into_any(),
                    NavKey::QuoteMatrix => view! { <QuoteMatrixView/> }.into_any(),
                    NavKey::ErpExport => view! { <ErpExportView/> }.into_any(),
                }}
            </main>
        </div>
    }
}
