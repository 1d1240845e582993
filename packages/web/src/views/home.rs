use api::Role;
use dioxus::prelude::*;
use ui::sections::{Feature, FeatureGrid, Hero, HowItWorks, RoleCallout};

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Verified creators",
        body: "Every account confirms its email and phone, and payouts go to KYC-checked bank accounts.",
    },
    Feature {
        title: "Live channel stats",
        body: "Creators link their YouTube channels so subscriber counts come straight from the source.",
    },
    Feature {
        title: "Transparent rate cards",
        body: "Media kits list what each deliverable costs, so briefs start from real numbers.",
    },
    Feature {
        title: "Simple plans",
        body: "Start free and upgrade when you need more reach. Pay securely with UPI or card.",
    },
];

const STEPS: [Feature; 3] = [
    Feature {
        title: "Create your account",
        body: "Pick your role and verify your email and phone with one-time codes.",
    },
    Feature {
        title: "Build your profile",
        body: "Link your channels, add KYC details and publish your media kit.",
    },
    Feature {
        title: "Start collaborating",
        body: "Brands and agencies discover creators and reach out with campaigns.",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {
            title: "Where creators and brands meet",
            subtitle: "Find the right influencers for your campaign, or get discovered by the brands you love.",
            cta_label: "Get started",
            cta_to: "/signup",
            secondary: Some(("See pricing".to_string(), "/pricing".to_string())),
        }
        FeatureGrid { heading: "Why Creator Marketplace", features: FEATURES.to_vec() }
        HowItWorks { heading: "How it works", steps: STEPS.to_vec() }
        section {
            class: "section",
            h2 { class: "section-title", "Who it's for" }
            div {
                class: "role-grid",
                RoleCallout {
                    role: Role::Influencer,
                    blurb: "Showcase your audience and rates, and let campaigns come to you.",
                }
                RoleCallout {
                    role: Role::Brand,
                    blurb: "Discover creators that fit your product and budget.",
                }
                RoleCallout {
                    role: Role::Agency,
                    blurb: "Manage your roster and pitch creators to brands in one place.",
                }
            }
        }
    }
}
