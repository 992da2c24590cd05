pub mod center;
pub mod global_context;
pub mod left;
pub mod mobile_nav;
pub mod top_header;

use leptos::prelude::*;
use left::Sidebar;
use mobile_nav::MobileNav;
use top_header::TopHeader;

/// Оболочка приложения
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// | (desktop) |        Content (Center)      |
/// +-----------+------------------------------+
/// |          MobileNav (только мобильные)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />

            <div class="app-main">
                <TopHeader />
                <main class="app-content">
                    {children()}
                </main>
            </div>

            <MobileNav />
        </div>
    }
}
