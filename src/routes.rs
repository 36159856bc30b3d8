//! # Application Routes
//!
//! The portal's navigation surface. Every view is loaded lazily: the table
//! only holds a loader that produces the view's [`ViewComponent`] when the
//! route is actually shown.
//!
//! | Path | Name | Meta |
//! |------|------|------|
//! | `/` | | redirect to `/login` |
//! | `/init` | `Init` | |
//! | `/login` | `Login` | |
//! | `/scanUpload` | `ScanUpload` | title `扫码上传`, `client` |
//! | `/home` | `Home` | |
//! | `/my` | `My` | |
//! | `/mustRead` | `MustRead` | |
//! | `/changePassword` | `ChangePassword` | |
//! | `/memberManagement` | `MemberManagement` | |
//! | `/albumDetail/{id}` | `AlbumDetail` | |
//! | `/**` | | `closeTab`, error view |

use crate::framework::ConfigurationError;
use crate::router::{Route, RouteTable};
use serde::Serialize;

/// Identifies a lazily loaded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewComponent {
    pub name: &'static str,
    pub module: &'static str,
}

impl ViewComponent {
    pub const fn new(name: &'static str, module: &'static str) -> Self {
        Self { name, module }
    }
}

fn lazy(path: &str, component: ViewComponent) -> Route<ViewComponent> {
    Route::view(path, move || async move { component })
}

/// Builds and validates the portal's route table.
pub fn app_routes() -> Result<RouteTable<ViewComponent>, ConfigurationError> {
    RouteTable::builder()
        .route(Route::redirect("/", "/login"))
        .route(lazy("/init", ViewComponent::new("Init", "view/init/index.vue")).name("Init"))
        .route(lazy("/login", ViewComponent::new("Login", "view/login/index.vue")).name("Login"))
        .route(
            lazy(
                "/scanUpload",
                ViewComponent::new("ScanUpload", "view/example/upload/scanUpload.vue"),
            )
            .name("ScanUpload")
            .title("扫码上传")
            .client(true),
        )
        .route(lazy("/home", ViewComponent::new("Home", "view/home/index.vue")).name("Home"))
        .route(lazy("/my", ViewComponent::new("My", "view/my/index.vue")).name("My"))
        .route(
            lazy("/mustRead", ViewComponent::new("MustRead", "view/mustRead/index.vue"))
                .name("MustRead"),
        )
        .route(
            lazy(
                "/changePassword",
                ViewComponent::new("ChangePassword", "view/changePassword/index.vue"),
            )
            .name("ChangePassword"),
        )
        .route(
            lazy(
                "/memberManagement",
                ViewComponent::new("MemberManagement", "view/memberManagement/index.vue"),
            )
            .name("MemberManagement"),
        )
        .route(
            lazy(
                "/albumDetail/{id}",
                ViewComponent::new("AlbumDetail", "view/albumDetail/index.vue"),
            )
            .name("AlbumDetail"),
        )
        // Must stay last: first match wins.
        .route(lazy("/**", ViewComponent::new("Error", "view/error/index.vue")).close_tab(true))
        .build()
}
