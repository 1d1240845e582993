use dioxus::prelude::*;

use ui::{AuthProvider, ConfigProvider, NoticeProvider};
use views::{
    AgencySignupPage, BrandSignupPage, Commercials, Dashboard, DashboardLayout, Home,
    InfluencerSignupPage, Login, NotFound, Pricing, ProfilePage, SignupChooser, SiteLayout, Social,
    Subscription, YoutubeCallback,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/pricing")]
        Pricing {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        SignupChooser {},
        #[route("/signup/influencer")]
        InfluencerSignupPage {},
        #[route("/signup/brand")]
        BrandSignupPage {},
        #[route("/signup/agency")]
        AgencySignupPage {},
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/")]
                Dashboard {},
                #[route("/social")]
                Social {},
                #[route("/social/youtube/callback?:code")]
                YoutubeCallback { code: String },
                #[route("/subscription")]
                Subscription {},
                #[route("/profile")]
                ProfilePage {},
                #[route("/commercials")]
                Commercials {},
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => eprintln!("Failed to start tokio runtime: {e}"),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    // Dioxus may already have installed a subscriber
    let _ = tracing_subscriber::fmt().with_target(false).try_init();

    // Surface config file errors at startup
    if let Err(e) = api::settings::get_config().await {
        tracing::error!("Invalid configuration: {e}");
        return;
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {e}");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MARKETPLACE_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: ui::CHECKOUT_SCRIPT_URL }

        ConfigProvider {
            AuthProvider {
                NoticeProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
